//! Host configuration
//!
//! Read from `$PRIDEFACE_CONFIG` if set, otherwise from `config.json` in
//! the platform config directory. A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FaceError, Result};
use crate::geometry::Rect;
use crate::resources::{ResourceId, SystemFont};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PRIDEFACE_CONFIG";

const MAX_SCALE: u8 = 8;

/// Which face layout to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceVariant {
    /// FredokaOne at 40pt (plus the 20pt cut), 56px band at y=56.
    #[default]
    CustomFont,
    /// Built-in Bitham 42 bold, 50px band at y=55.
    SystemFont,
}

impl FaceVariant {
    /// Where the time text sits.
    pub fn time_frame(self) -> Rect {
        match self {
            FaceVariant::CustomFont => Rect::new(0, 56, 144, 56),
            FaceVariant::SystemFont => Rect::new(0, 55, 144, 50),
        }
    }

    /// Custom fonts to load, the time font first.
    pub fn custom_fonts(self) -> &'static [ResourceId] {
        match self {
            FaceVariant::CustomFont => &[ResourceId::FontFredokaOne40, ResourceId::FontFredokaOne20],
            FaceVariant::SystemFont => &[],
        }
    }

    /// Built-in font for the time, when no custom font is used.
    pub fn system_font(self) -> Option<SystemFont> {
        match self {
            FaceVariant::CustomFont => None,
            FaceVariant::SystemFont => Some(SystemFont::BithamBold42),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    pub variant: FaceVariant,
    /// Physical pixels per logical watch pixel.
    pub scale: u8,
    /// Directory holding `background.png` and font files.
    pub assets_dir: Option<PathBuf>,
    /// Initial 12h/24h preference of the host.
    pub use_24h: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            variant: FaceVariant::default(),
            scale: 2,
            assets_dir: None,
            use_24h: true,
        }
    }
}

impl FaceConfig {
    /// `$PRIDEFACE_CONFIG`, or the platform config dir.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("", "", "prideface").map(|p| p.config_dir().join("config.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: FaceConfig = serde_json::from_str(&contents)?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load from the default path, falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("no config directory, using defaults");
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "bad config, using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(FaceError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("scale must be 1..={}, got {}", MAX_SCALE, self.scale),
            });
        }
        Ok(())
    }
}

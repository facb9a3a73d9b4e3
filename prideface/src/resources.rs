//! Desktop resource provider
//!
//! Assets are looked up in the configured assets directory first, then
//! next to the executable and in the system share directory. Anything
//! missing falls back to a built-in: pride stripes for the background,
//! egui's proportional font for custom fonts.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use egui::{FontData, FontDefinitions, FontFamily};
use facecore::error::{FaceError, Result};
use facecore::geometry::{Size, SCREEN_HEIGHT, SCREEN_WIDTH};
use facecore::resources::{Bitmap, Font, ResourceId, ResourceKind, ResourceLedger, ResourceProvider};

use crate::background::pride_stripes;

const BACKGROUND_FILE: &str = "background.png";

const CUSTOM_FONTS: [ResourceId; 2] = [ResourceId::FontFredokaOne40, ResourceId::FontFredokaOne20];

fn font_file(family: &str) -> String {
    format!("{}-Regular.ttf", family)
}

pub struct DesktopResources {
    ledger: ResourceLedger,
    assets_dir: Option<PathBuf>,
    /// Font bytes found on disk, by family.
    font_data: HashMap<&'static str, Vec<u8>>,
}

impl DesktopResources {
    pub fn new(assets_dir: Option<PathBuf>) -> Self {
        let mut resources = Self {
            ledger: ResourceLedger::new(),
            assets_dir,
            font_data: HashMap::new(),
        };
        for family in CUSTOM_FONTS.iter().filter_map(|id| id.font_family()) {
            if resources.font_data.contains_key(family) {
                continue;
            }
            let Some(path) = resources.find_asset(&font_file(family)) else {
                tracing::info!(family, "font file not found, using built-in font");
                continue;
            };
            match std::fs::read(&path) {
                Ok(bytes) => {
                    tracing::debug!(family, path = %path.display(), "found font");
                    resources.font_data.insert(family, bytes);
                }
                Err(e) => tracing::warn!(family, path = %path.display(), error = %e, "unreadable font"),
            }
        }
        resources
    }

    fn search_paths(&self, file: &str) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = &self.assets_dir {
            paths.push(dir.join(file));
        }
        // Relative to executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                paths.push(dir.join("assets").join(file));
            }
        }
        paths.push(PathBuf::from("/usr/share/prideface").join(file));
        paths
    }

    fn find_asset(&self, file: &str) -> Option<PathBuf> {
        self.search_paths(file).into_iter().find(|p| p.is_file())
    }

    /// Register every custom font found on disk with egui. Returns the
    /// families that are now available.
    pub fn install_fonts(&self, ctx: &egui::Context) -> HashSet<&'static str> {
        let mut fonts = FontDefinitions::default();
        let mut installed = HashSet::new();
        for (&family, bytes) in &self.font_data {
            fonts
                .font_data
                .insert(family.to_owned(), FontData::from_owned(bytes.clone()));
            fonts
                .families
                .insert(FontFamily::Name(family.into()), vec![family.to_owned()]);
            installed.insert(family);
        }
        ctx.set_fonts(fonts);
        installed
    }

    fn decode_background(&self, id: ResourceId) -> Result<(Size, Vec<u8>)> {
        if let Some(path) = self.find_asset(BACKGROUND_FILE) {
            let image = image::open(&path)
                .map_err(|source| FaceError::Asset { id, source })?
                .to_rgba8();
            let (w, h) = image.dimensions();
            let size = match (i16::try_from(w), i16::try_from(h)) {
                (Ok(w), Ok(h)) => Size::new(w, h),
                _ => return Err(FaceError::ResourceUnavailable(id)),
            };
            tracing::debug!(path = %path.display(), w, h, "decoded background");
            return Ok((size, image.into_raw()));
        }
        let pixels = pride_stripes(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
            .ok_or(FaceError::ResourceUnavailable(id))?;
        Ok((Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), pixels))
    }
}

impl ResourceProvider for DesktopResources {
    fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    fn load_bitmap(&mut self, id: ResourceId) -> Result<Bitmap> {
        match id {
            ResourceId::ImagePrideBackground => {
                let (size, pixels) = self.decode_background(id)?;
                let lease = self.ledger.acquire(ResourceKind::Bitmap, id.name());
                Bitmap::from_rgba(id, size, pixels, lease)
            }
            _ => Err(FaceError::ResourceUnavailable(id)),
        }
    }

    fn load_custom_font(&mut self, id: ResourceId) -> Result<Font> {
        let size = id.point_size().ok_or(FaceError::ResourceUnavailable(id))?;
        Ok(Font::custom(id, size, self.ledger.acquire(ResourceKind::Font, id.name())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_assets() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("prideface-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_background_falls_back_to_stripes() {
        let mut resources = DesktopResources::new(Some(empty_assets()));
        let bitmap = resources.load_bitmap(ResourceId::ImagePrideBackground).unwrap();
        assert_eq!(bitmap.size(), Size::new(144, 168));
        assert_eq!(resources.ledger().live(ResourceKind::Bitmap), 1);
        drop(bitmap);
        assert_eq!(resources.ledger().live_total(), 0);
    }

    #[test]
    fn test_font_ids_are_not_bitmaps() {
        let mut resources = DesktopResources::new(Some(empty_assets()));
        assert!(matches!(
            resources.load_bitmap(ResourceId::FontFredokaOne40),
            Err(FaceError::ResourceUnavailable(_))
        ));
        assert!(resources.load_custom_font(ResourceId::ImagePrideBackground).is_err());
        assert_eq!(resources.ledger().live_total(), 0);
    }

    #[test]
    fn test_custom_font_leased() {
        let mut resources = DesktopResources::new(Some(empty_assets()));
        let font = resources.load_custom_font(ResourceId::FontFredokaOne20).unwrap();
        assert_eq!(font.point_size(), 20);
        assert_eq!(resources.ledger().live(ResourceKind::Font), 1);
    }
}

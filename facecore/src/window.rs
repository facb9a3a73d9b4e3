//! The face window and the layers it owns while loaded
//!
//! Loading builds a [`FaceLayers`]; dropping it is the unload. Field order
//! in `FaceLayers` is the teardown order: time layer, background layer
//! (then the bitmap it holds), fonts.

use crate::config::FaceVariant;
use crate::error::Result;
use crate::geometry::{Color, Rect, TextAlignment};
use crate::layer::{BitmapLayer, Canvas, Layer, TextLayer};
use crate::resources::{Font, ResourceId, ResourceProvider, SystemFont};

/// Text shown until the first format pass.
pub const PLACEHOLDER_TEXT: &str = "00:00";

#[derive(Debug)]
struct FaceFonts {
    time: Font,
    // loaded alongside the time font, not drawn
    secondary: Option<Font>,
}

impl FaceFonts {
    fn load(variant: FaceVariant, provider: &mut dyn ResourceProvider) -> Result<Self> {
        if let Some(system) = variant.system_font() {
            return Ok(Self {
                time: provider.system_font(system),
                secondary: None,
            });
        }
        let mut fonts = variant
            .custom_fonts()
            .iter()
            .map(|&id| provider.load_custom_font(id))
            .collect::<Result<Vec<_>>>()?
            .into_iter();
        let time = fonts
            .next()
            .unwrap_or_else(|| provider.system_font(SystemFont::BithamBold42));
        Ok(Self {
            time,
            secondary: fonts.next(),
        })
    }
}

/// Everything created on load.
#[derive(Debug)]
pub struct FaceLayers {
    time_layer: TextLayer,
    background_layer: BitmapLayer,
    fonts: FaceFonts,
}

impl FaceLayers {
    fn create(window_frame: Rect, variant: FaceVariant, provider: &mut dyn ResourceProvider) -> Result<Self> {
        let fonts = FaceFonts::load(variant, provider)?;

        let background = provider.load_bitmap(ResourceId::ImagePrideBackground)?;
        let background_layer = BitmapLayer::new(provider.ledger(), window_frame, background);

        let mut time_layer = TextLayer::new(provider.ledger(), variant.time_frame(), fonts.time.clone());
        time_layer.set_background_color(Color::Clear);
        time_layer.set_text_color(Color::Black);
        time_layer.set_text(PLACEHOLDER_TEXT);
        time_layer.set_text_alignment(TextAlignment::Center);

        Ok(Self {
            time_layer,
            background_layer,
            fonts,
        })
    }

    /// Children of the root layer in paint order: background, then time.
    pub fn children(&self) -> [&dyn Layer; 2] {
        [&self.background_layer, &self.time_layer]
    }

    pub fn time_layer(&self) -> &TextLayer {
        &self.time_layer
    }

    pub fn time_layer_mut(&mut self) -> &mut TextLayer {
        &mut self.time_layer
    }

    pub fn background_layer(&self) -> &BitmapLayer {
        &self.background_layer
    }

    pub fn secondary_font(&self) -> Option<&Font> {
        self.fonts.secondary.as_ref()
    }
}

impl Drop for FaceLayers {
    fn drop(&mut self) {
        tracing::debug!("tearing down face layers");
    }
}

#[derive(Debug)]
enum WindowState {
    Unloaded,
    Loaded(FaceLayers),
}

#[derive(Debug)]
pub struct Window {
    frame: Rect,
    variant: FaceVariant,
    state: WindowState,
}

impl Window {
    pub fn new(variant: FaceVariant) -> Self {
        Self {
            frame: Rect::screen(),
            variant,
            state: WindowState::Unloaded,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn variant(&self) -> FaceVariant {
        self.variant
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, WindowState::Loaded(_))
    }

    /// Build the layers. Returns `false` if the window was already loaded.
    ///
    /// On error nothing stays acquired.
    pub fn load(&mut self, provider: &mut dyn ResourceProvider) -> Result<bool> {
        if self.is_loaded() {
            tracing::debug!("window already loaded");
            return Ok(false);
        }
        let layers = FaceLayers::create(self.frame, self.variant, provider)?;
        self.state = WindowState::Loaded(layers);
        tracing::debug!(variant = ?self.variant, "window loaded");
        Ok(true)
    }

    /// Destroy the layers. Returns `false` if there was nothing to unload.
    pub fn unload(&mut self) -> bool {
        match std::mem::replace(&mut self.state, WindowState::Unloaded) {
            WindowState::Loaded(layers) => {
                drop(layers);
                tracing::debug!("window unloaded");
                true
            }
            WindowState::Unloaded => {
                tracing::debug!("window already unloaded");
                false
            }
        }
    }

    pub fn layers(&self) -> Option<&FaceLayers> {
        match &self.state {
            WindowState::Loaded(layers) => Some(layers),
            WindowState::Unloaded => None,
        }
    }

    pub fn layers_mut(&mut self) -> Option<&mut FaceLayers> {
        match &mut self.state {
            WindowState::Loaded(layers) => Some(layers),
            WindowState::Unloaded => None,
        }
    }

    /// Paint the root layer's children. An unloaded window paints nothing.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if let Some(layers) = self.layers() {
            for child in layers.children() {
                child.draw(canvas);
            }
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.unload();
    }
}

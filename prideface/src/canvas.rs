//! egui painter as a watch canvas.

use std::collections::{HashMap, HashSet};

use egui::{Align2, Color32, ColorImage, FontFamily, FontId, Painter, Pos2, TextureHandle, TextureOptions};
use facecore::geometry::{Color, Rect, TextAlignment};
use facecore::layer::Canvas;
use facecore::resources::{Bitmap, Font, FontFace, ResourceId};
use facecore::theme::FaceColors;

/// GPU copies of the face bitmaps, dropped whenever the window unloads.
#[derive(Default)]
pub struct BitmapTextures {
    textures: HashMap<ResourceId, TextureHandle>,
}

impl BitmapTextures {
    fn get_or_upload(&mut self, ctx: &egui::Context, bitmap: &Bitmap) -> &TextureHandle {
        self.textures.entry(bitmap.id()).or_insert_with(|| {
            let size = bitmap.size();
            let image = ColorImage::from_rgba_unmultiplied(
                [size.w.max(0) as usize, size.h.max(0) as usize],
                bitmap.pixels(),
            );
            ctx.load_texture(bitmap.id().name(), image, TextureOptions::NEAREST)
        })
    }

    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

pub struct EguiCanvas<'a> {
    pub painter: &'a Painter,
    /// Screen position of the watch's top-left pixel.
    pub origin: Pos2,
    pub scale: f32,
    pub textures: &'a mut BitmapTextures,
    /// Custom font families registered with egui.
    pub families: &'a HashSet<&'static str>,
}

impl EguiCanvas<'_> {
    fn to_screen(&self, frame: Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(frame.left() as f32, frame.top() as f32) * self.scale,
            egui::vec2(frame.size.w as f32, frame.size.h as f32) * self.scale,
        )
    }

    fn font_id(&self, font: &Font) -> FontId {
        let size = font.point_size() as f32 * self.scale;
        let family = match font.face() {
            FontFace::Custom(id) => id
                .font_family()
                .filter(|family| self.families.contains(family))
                .map(|family| FontFamily::Name(family.into())),
            FontFace::System(_) => None,
        };
        FontId::new(size, family.unwrap_or(FontFamily::Proportional))
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, frame: Rect, color: Color) {
        if let Some(color) = FaceColors::to_color32(color) {
            self.painter.rect_filled(self.to_screen(frame), 0.0, color);
        }
    }

    fn draw_bitmap(&mut self, frame: Rect, bitmap: &Bitmap) {
        let rect = self.to_screen(frame);
        let texture = self.textures.get_or_upload(self.painter.ctx(), bitmap);
        let uv = egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        self.painter.image(texture.id(), rect, uv, Color32::WHITE);
    }

    fn draw_text(&mut self, frame: Rect, text: &str, font: &Font, alignment: TextAlignment, color: Color) {
        let Some(color) = FaceColors::to_color32(color) else {
            return;
        };
        let rect = self.to_screen(frame);
        let (pos, anchor) = match alignment {
            TextAlignment::Left => (rect.left_top(), Align2::LEFT_TOP),
            TextAlignment::Center => (rect.center_top(), Align2::CENTER_TOP),
            TextAlignment::Right => (rect.right_top(), Align2::RIGHT_TOP),
        };
        let clipped = self.painter.with_clip_rect(rect);
        clipped.text(pos, anchor, text, self.font_id(font), color);
    }
}

//! The eframe application hosting the face.

use std::collections::HashSet;

use egui::{CentralPanel, Context, Key};
use facecore::clock::{ClockSource, LocalClock};
use facecore::{FaceTheme, RepaintController, TickTimerService, WatchFace};

use crate::canvas::{BitmapTextures, EguiCanvas};
use crate::resources::DesktopResources;

pub struct PrideFaceApp {
    face: WatchFace,
    resources: DesktopResources,
    clock: LocalClock,
    ticks: TickTimerService,
    repaint: RepaintController,
    textures: BitmapTextures,
    families: HashSet<&'static str>,
    theme: FaceTheme,
    scale: f32,
}

impl PrideFaceApp {
    pub fn new(
        face: WatchFace,
        resources: DesktopResources,
        clock: LocalClock,
        ticks: TickTimerService,
        scale: f32,
    ) -> Self {
        Self {
            face,
            resources,
            clock,
            ticks,
            repaint: RepaintController::new(),
            textures: BitmapTextures::default(),
            families: HashSet::new(),
            theme: FaceTheme::default(),
            scale,
        }
    }

    /// Style the context and register fonts. Call once from the creation
    /// context, before the first frame.
    pub fn install(&mut self, ctx: &Context) {
        self.theme.apply(ctx);
        self.families = self.resources.install_fonts(ctx);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (toggle_style, toggle_window) = ctx.input(|i| (i.key_pressed(Key::T), i.key_pressed(Key::L)));

        if toggle_style {
            let use_24h = self.clock.toggle_style();
            tracing::info!(use_24h, "host clock style changed");
            self.face.update_time(&self.clock);
            self.repaint.mark_needs_repaint();
        }

        if toggle_window {
            if self.face.window().is_loaded() {
                self.face.unload();
                self.textures.clear();
            } else if let Err(e) = self.face.load(&mut self.resources, &self.clock) {
                tracing::error!(error = %e, "failed to load face window");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            self.repaint.mark_needs_repaint();
        }
    }
}

impl eframe::App for PrideFaceApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keys(ctx);

        if let Some(tick) = self.ticks.poll(self.clock.now()) {
            self.face.handle_tick(&tick, &self.clock);
        }

        CentralPanel::default()
            .frame(self.theme.screen_frame())
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let mut canvas = EguiCanvas {
                    painter: ui.painter(),
                    origin,
                    scale: self.scale,
                    textures: &mut self.textures,
                    families: &self.families,
                };
                self.face.render(&mut canvas);
            });

        let until_next_tick = self.ticks.until_next_tick(&self.clock.now());
        self.repaint.end_frame(ctx, until_next_tick);
    }
}

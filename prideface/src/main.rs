//! prideface — a minimal pride watchface
//!
//! A background image with the time on top, refreshed once a minute. Runs
//! the face in a desktop window the size of the watch screen.
//!
//! Keys: `T` toggles the host's 12h/24h preference, `L` unloads or
//! reloads the face window.

mod app;
mod background;
mod canvas;
mod resources;

use std::error::Error;
use std::process::ExitCode;

use eframe::NativeOptions;
use facecore::geometry::{SCREEN_HEIGHT, SCREEN_WIDTH};
use facecore::{FaceConfig, LocalClock, TickTimerService, TimeUnits, WatchFace};
use tracing_subscriber::EnvFilter;

use crate::app::PrideFaceApp;
use crate::resources::DesktopResources;

fn run(config: FaceConfig) -> Result<(), Box<dyn Error>> {
    let ticks = TickTimerService::subscribe(TimeUnits::MINUTE);
    let clock = LocalClock::new(config.use_24h);
    let mut resources = DesktopResources::new(config.assets_dir.clone());

    let mut face = WatchFace::new(config.variant);
    face.load(&mut resources, &clock)?;

    let scale = config.scale as f32;
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([SCREEN_WIDTH as f32 * scale, SCREEN_HEIGHT as f32 * scale])
        .with_resizable(false)
        .with_title("prideface");

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = PrideFaceApp::new(face, resources, clock, ticks, scale);
    eframe::run_native(
        "prideface",
        options,
        Box::new(move |cc| {
            let mut app = app;
            app.install(&cc.egui_ctx);
            Box::new(app)
        }),
    )?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = FaceConfig::load_or_default();
    tracing::info!(variant = ?config.variant, scale = config.scale, "starting prideface");

    match run(config) {
        Ok(()) => {
            tracing::info!("exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "prideface failed");
            ExitCode::FAILURE
        }
    }
}

//! Cropper: simple image editing tools.
//!
//! The desktop front end is built on `eframe`. Builds without the `gui`
//! feature, or runs with `--simulate`, get a text console instead.

#[cfg(feature = "gui")]
mod app;
mod cli;
mod command;
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
mod config;
mod console;
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
mod geometry;
#[cfg(feature = "gui")]
mod image_window;
#[cfg(feature = "gui")]
mod menu;
#[cfg(feature = "gui")]
mod splash;

use crate::cli::{Cli, Mode};
use crate::config::AppConfig;
use crate::console::Console;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.no_splash {
        config.splash.enabled = false;
    }

    let mode = Mode::select(&cli);
    log::info!("starting in {mode:?} mode");
    match mode {
        Mode::Simulation => simulate(&config),
        Mode::Gui => run_gui(config, cli),
    }
}

fn simulate(config: &AppConfig) -> Result<()> {
    print!("{}", console::banner());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(stdin.lock(), stdout.lock(), config.prompt.as_str()).run()
}

#[cfg(feature = "gui")]
fn run_gui(config: AppConfig, cli: Cli) -> Result<()> {
    use eframe::egui;

    let size = egui::vec2(config.window.width, config.window.height);
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default()
        .with_title("Cropper")
        .with_inner_size(size)
        .with_resizable(true);

    let app = app::CropperApp::new(&config, cli.images);
    eframe::run_native(
        "Cropper",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the window: {e}"))
}

#[cfg(not(feature = "gui"))]
fn run_gui(config: AppConfig, _cli: Cli) -> Result<()> {
    log::warn!("built without the gui feature; falling back to simulation mode");
    simulate(&config)
}

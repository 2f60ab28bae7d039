// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "cropper", version)]
#[command(about = "Simple Image Editing Tools", long_about = None)]
pub(crate) struct Cli {
    /// Run the text console instead of opening a window
    #[arg(long)]
    pub(crate) simulate: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Skip the splash screen
    #[arg(long = "no-splash")]
    pub(crate) no_splash: bool,

    /// Images to open at start-up
    #[arg(value_name = "IMAGE")]
    pub(crate) images: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Gui,
    Simulation,
}

impl Mode {
    pub(crate) fn select(cli: &Cli) -> Self {
        if cli.simulate || !cfg!(feature = "gui") {
            Mode::Simulation
        } else {
            Mode::Gui
        }
    }
}

/// Start-up configuration
///
/// There is no config file and nothing is remembered between runs; the
/// command line is the only source of settings.

use clap::Parser;
use std::path::PathBuf;

/// Browse a folder of images and tweak their hue, saturation and value
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hueview", version, about)]
pub struct Settings {
    /// Directory or image file to open at start-up
    pub path: Option<PathBuf>,

    /// Start with "Persist Filter" switched on
    #[arg(long)]
    pub persist_filter: bool,

    /// Delete only removes images from the list, never from disk
    #[arg(long)]
    pub keep_files: bool,
}

impl Settings {
    /// Parse the process arguments
    pub fn from_args() -> Self {
        Self::parse()
    }
}

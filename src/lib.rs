pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fit;
pub mod font;
pub mod layout;
pub mod message;
pub mod outline;
pub mod render;
pub mod style;

pub use error::{RenderError, Result};
pub use render::{generate_text_image, generate_text_image_with, render, RenderedImage};
pub use style::{Color, StyleConfig};

use log::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::font::FontResolver;

pub fn run(cli: Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    let mut style = config.style.clone();
    cli.apply_overrides(&mut style);

    let resolver = match &cli.font {
        Some(path) => FontResolver::new([path.clone()]),
        None => config.font.resolver(),
    };

    let (line1, line2) = cli.lines(std::io::stdin().lock())?;
    let png = generate_text_image_with(&resolver, &line1, &line2, &style)?;
    std::fs::write(&cli.output, &png)?;

    info!("Wrote {} bytes to {}", png.len(), cli.output.display());
    Ok(())
}

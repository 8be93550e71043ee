use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use crate::message::{parse_message, MessageError};
use crate::style::{Color, StyleConfig};

#[derive(Parser, Debug)]
#[command(name = "outline-text")]
#[command(version)]
#[command(about = "Render two lines of outlined text into a transparent PNG", long_about = None)]
#[command(after_help = "\
INPUT:
    Pass both lines as arguments, or pass one argument containing a newline.
    With no arguments the message is read from stdin; its first two lines
    are used.

CONFIG:
    Defaults are read from $XDG_CONFIG_HOME/outline-text/config.toml
    ([style] and [font] tables). Flags override the file.")]
pub struct Cli {
    /// First line (drawn in the line-1 color)
    pub line1: Option<String>,

    /// Second line (drawn in the line-2 color)
    pub line2: Option<String>,

    /// Where to write the PNG
    #[arg(short, long, default_value = "text_image.png")]
    pub output: PathBuf,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use only this font file (falls back to the builtin font if missing)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Starting font size in pixels
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Smallest font size the fitting loop may shrink to
    #[arg(long)]
    pub min_font_size: Option<u32>,

    /// Width budget in pixels, side padding included
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Outline radius in pixels at the starting font size
    #[arg(long)]
    pub outline_width: Option<u32>,

    /// Gap between the two lines in pixels
    #[arg(long)]
    pub line_spacing: Option<u32>,

    /// Fill color of the first line (#RRGGBB or #RRGGBBAA)
    #[arg(long)]
    pub line1_color: Option<Color>,

    /// Fill color of the second line
    #[arg(long)]
    pub line2_color: Option<Color>,

    /// Outline color
    #[arg(long)]
    pub outline_color: Option<Color>,
}

impl Cli {
    pub fn apply_overrides(&self, style: &mut StyleConfig) {
        let sizes = [
            (self.font_size, &mut style.font_size),
            (self.min_font_size, &mut style.min_font_size),
            (self.max_width, &mut style.max_width),
            (self.outline_width, &mut style.outline_width),
            (self.line_spacing, &mut style.line_spacing),
        ];
        for (value, field) in sizes {
            if let Some(value) = value {
                *field = value;
            }
        }

        let colors = [
            (self.line1_color, &mut style.line1_color),
            (self.line2_color, &mut style.line2_color),
            (self.outline_color, &mut style.outline_color),
        ];
        for (value, field) in colors {
            if let Some(value) = value {
                *field = value;
            }
        }
    }

    /// The two lines to render, from arguments or from `stdin`.
    pub fn lines(&self, mut stdin: impl Read) -> Result<(String, String), LinesError> {
        let message = match (&self.line1, &self.line2) {
            (Some(first), Some(second)) => format!("{first}\n{second}"),
            (Some(message), None) => message.clone(),
            _ => {
                let mut message = String::new();
                stdin.read_to_string(&mut message)?;
                message
            }
        };
        Ok(parse_message(&message)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LinesError {
    #[error("Failed to read message from stdin: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Message(#[from] MessageError),
}

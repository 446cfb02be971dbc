//! Raster preview of a compiled command, saved as PNG.

pub mod picture;
pub mod shapes;

use thiserror::Error;

use crate::{
    compiler::Command,
    constants::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_BACKGROUND_COLOR, PALETTE},
};
pub use picture::{Color, Picture};
use shapes::{draw_circle, draw_line, draw_rectangle};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Color not recognized: {0}")]
    UnknownColor(String),

    #[error("Failed to save picture: {0}")]
    Save(#[from] image::ImageError),
}

/// Resolves a palette name or `#rrggbb` literal, case-insensitively.
pub fn parse_color(color: &str) -> Option<Color> {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some((channel(0)?, channel(2)?, channel(4)?));
    }

    PALETTE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map(|(_, rgb)| *rgb)
}

pub fn render_command(command: &Command) -> Result<Picture, RenderError> {
    let mut picture = Picture::new(CANVAS_WIDTH, CANVAS_HEIGHT, &DEFAULT_BACKGROUND_COLOR);

    let color = parse_color(command.color()).ok_or_else(|| RenderError::UnknownColor(command.color().to_string()))?;

    match command {
        Command::Circle { center, radius, .. } => {
            draw_circle(&mut picture, center, *radius, &color);
        }

        Command::Rectangle { origin, width, height, .. } => {
            draw_rectangle(&mut picture, origin, *width, *height, &color);
        }

        Command::Line { from, to, stroke_width, .. } => {
            draw_line(&mut picture, from, to, *stroke_width, &color);
        }
    }

    Ok(picture)
}

pub fn save_preview(command: &Command, file_path: &str) -> Result<(), RenderError> {
    render_command(command)?.save_as_file(file_path)?;

    tracing::info!(file_path, shape = %command.shape(), "preview saved");

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

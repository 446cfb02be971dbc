use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, SVG_NAMESPACE};
use super::parser::Command;

pub fn generate(command: &Command) -> String {
    let mut svg = format!("<svg width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" xmlns=\"{SVG_NAMESPACE}\">\n");

    let element = match command {
        Command::Circle { center, radius, color } => {
            format!("<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"{color}\" />", center.x, center.y)
        }

        Command::Rectangle { origin, width, height, color } => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{width}\" height=\"{height}\" fill=\"{color}\" />",
            origin.x, origin.y
        ),

        Command::Line { from, to, color, stroke_width } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" />",
            from.x, from.y, to.x, to.y
        ),
    };

    svg.push_str("  ");
    svg.push_str(&element);
    svg.push('\n');
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;

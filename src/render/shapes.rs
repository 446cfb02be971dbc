use crate::compiler::Point;
use super::picture::{Color, Picture};

// a pixel is covered when its center (i + 0.5) lies inside the shape, same rule an svg renderer uses

fn first_pixel(edge: f64) -> isize {
    (edge - 0.5).ceil() as isize
}

fn last_pixel(edge: f64) -> isize {
    (edge - 0.5).floor() as isize
}

fn clamp_rows(y0: isize, y1: isize, picture: &Picture) -> (isize, isize) {
    (y0.max(0), y1.min(picture.yres as isize - 1))
}

pub fn draw_circle(picture: &mut Picture, center: &Point, radius: f64, color: &Color) {
    if !(radius > 0.0) {
        return;
    }

    let (y_start, y_end) = clamp_rows(first_pixel(center.y - radius), last_pixel(center.y + radius), picture);

    for y in y_start..=y_end {
        let dy = y as f64 + 0.5 - center.y;
        let span = radius * radius - dy * dy;
        if span < 0.0 {
            continue;
        }

        let half = span.sqrt();
        picture.draw_scanline(first_pixel(center.x - half), last_pixel(center.x + half), y, color);
    }
}

pub fn draw_rectangle(picture: &mut Picture, origin: &Point, width: f64, height: f64, color: &Color) {
    // svg draws nothing for a non-positive width or height
    if !(width > 0.0 && height > 0.0) {
        return;
    }

    // right and bottom edges are exclusive
    let x0 = first_pixel(origin.x);
    let x1 = first_pixel(origin.x + width).saturating_sub(1);
    let (y_start, y_end) = clamp_rows(first_pixel(origin.y), first_pixel(origin.y + height).saturating_sub(1), picture);

    for y in y_start..=y_end {
        picture.draw_scanline(x0, x1, y, color);
    }
}

/// Strokes the segment with butt caps: a pixel is painted when its center
/// projects onto the segment and lies within half the stroke width of it.
pub fn draw_line(picture: &mut Picture, from: &Point, to: &Point, stroke_width: f64, color: &Color) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let length_squared = dx * dx + dy * dy;
    let half = stroke_width / 2.0;

    if !(length_squared > 0.0 && half > 0.0) {
        return;
    }

    let x0 = first_pixel(from.x.min(to.x) - half).max(0);
    let x1 = last_pixel(from.x.max(to.x) + half).min(picture.xres as isize - 1);
    let (y_start, y_end) = clamp_rows(first_pixel(from.y.min(to.y) - half), last_pixel(from.y.max(to.y) + half), picture);

    for y in y_start..=y_end {
        for x in x0..=x1 {
            let (px, py) = (x as f64 + 0.5 - from.x, y as f64 + 0.5 - from.y);

            let t = (px * dx + py * dy) / length_squared;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }

            let cross = px * dy - py * dx;
            if cross * cross <= half * half * length_squared {
                picture.plot(x, y, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "shapes_test.rs"]
mod tests;

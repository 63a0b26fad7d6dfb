//! Software rasterization of strokes into an RGBA frame buffer. World
//! coordinates are centered on the frame with +y up.

use crate::canvas::Stroke;
use crate::color::Color;
use crate::geometry::Point;

/// Fill the whole frame with the background color.
pub fn clear(frame: &mut [u8], color: Color) {
    let rgba = color.as_rgba();
    for px in frame.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn to_screen(p: Point, width: u32, height: u32) -> (i32, i32) {
    (
        (width as f64 / 2.0 + p.x).round() as i32,
        (height as f64 / 2.0 - p.y).round() as i32,
    )
}

/// Rasterize one stroke with Bresenham's algorithm, clipping per pixel.
pub fn draw_stroke(frame: &mut [u8], width: u32, height: u32, stroke: &Stroke, color: Color) {
    let (x0, y0) = to_screen(stroke.from, width, height);
    let (x1, y1) = to_screen(stroke.to, width, height);
    draw_line(frame, width, height, x0, y0, x1, y1, color);
}

fn draw_line(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    let rgba = color.as_rgba();
    let mut x0 = x0;
    let mut y0 = y0;
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x0 >= 0 && x0 < width as i32 && y0 >= 0 && y0 < height as i32 {
            let idx = ((y0 as u32 * width + x0 as u32) * 4) as usize;
            frame[idx..idx + 4].copy_from_slice(&rgba);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

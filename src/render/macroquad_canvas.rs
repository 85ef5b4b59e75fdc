use macroquad::prelude::{
    Color, draw_circle, draw_ellipse, draw_line, draw_rectangle, draw_text, draw_triangle, vec2,
};

use crate::core::{Canvas, Rgba};

/// Draws straight into the current macroquad frame.
#[derive(Default)]
pub struct MacroquadCanvas;

impl MacroquadCanvas {
    pub fn new() -> Self {
        MacroquadCanvas
    }
}

fn to_color(color: Rgba) -> Color {
    let [r, g, b, a] = color.to_u8();
    Color::from_rgba(r, g, b, a)
}

impl Canvas for MacroquadCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        draw_rectangle(x, y, w, h, to_color(color));
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32, color: Rgba) {
        // macroquad takes radii
        if w == h {
            draw_circle(cx, cy, w / 2.0, to_color(color));
        } else {
            draw_ellipse(cx, cy, w / 2.0, h / 2.0, 0.0, to_color(color));
        }
    }

    fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Rgba) {
        draw_triangle(
            vec2(a.0, a.1),
            vec2(b.0, b.1),
            vec2(c.0, c.1),
            to_color(color),
        );
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba) {
        draw_line(from.0, from.1, to.0, to.1, thickness, to_color(color));
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
        // macroquad anchors text at the baseline
        draw_text(text, x, y + size, size, to_color(color));
    }
}

use macroquad::prelude::*;
use parabolic_target::core::mapping::CanvasPoint;
use parabolic_target::core::surface::{Rgba, Surface};

use crate::constants::CANVAS_BORDER;

fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

/// Game canvas placed at a fixed offset inside the window.
pub(crate) struct MacroquadSurface<'a> {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    font: Option<&'a Font>,
}

impl<'a> MacroquadSurface<'a> {
    pub(crate) fn new(left: f32, top: f32, size: (f64, f64), font: Option<&'a Font>) -> Self {
        Self {
            left,
            top,
            width: size.0 as f32,
            height: size.1 as f32,
            font,
        }
    }

    fn screen(&self, p: CanvasPoint) -> Vec2 {
        vec2(self.left + p.x as f32, self.top + p.y as f32)
    }

    pub(crate) fn draw_border(&self) {
        draw_rectangle_lines(self.left, self.top, self.width, self.height, 2.0, CANVAS_BORDER);
    }
}

impl Surface for MacroquadSurface<'_> {
    fn width(&self) -> f64 {
        f64::from(self.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.height)
    }

    fn clear(&mut self, color: Rgba) {
        draw_rectangle(self.left, self.top, self.width, self.height, to_color(color));
    }

    fn line(&mut self, from: CanvasPoint, to: CanvasPoint, thickness: f64, color: Rgba) {
        let a = self.screen(from);
        let b = self.screen(to);
        draw_line(a.x, a.y, b.x, b.y, thickness as f32, to_color(color));
    }

    fn fill_circle(&mut self, center: CanvasPoint, radius: f64, color: Rgba) {
        let c = self.screen(center);
        draw_circle(c.x, c.y, radius as f32, to_color(color));
    }

    fn text(&mut self, label: &str, at: CanvasPoint, font_size: u16, color: Rgba) {
        let p = self.screen(at);
        draw_ui_text(label, p.x, p.y, font_size, to_color(color), self.font);
    }
}

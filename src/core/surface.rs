//! Drawing surface the scene renders into.
//!
//! The interactive app draws straight to the macroquad window, the PNG
//! export replays a recorded [`DrawList`] through plotters.

use crate::core::mapping::CanvasPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self, color: Rgba);
    fn line(&mut self, from: CanvasPoint, to: CanvasPoint, thickness: f64, color: Rgba);
    fn fill_circle(&mut self, center: CanvasPoint, radius: f64, color: Rgba);
    fn text(&mut self, label: &str, at: CanvasPoint, font_size: u16, color: Rgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Line {
        from: CanvasPoint,
        to: CanvasPoint,
        thickness: f64,
        color: Rgba,
    },
    FillCircle {
        center: CanvasPoint,
        radius: f64,
        color: Rgba,
    },
    Text {
        label: String,
        at: CanvasPoint,
        font_size: u16,
        color: Rgba,
    },
}

/// Surface that records what was drawn. A clear drops everything before it.
#[derive(Clone, Debug)]
pub struct DrawList {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = (CanvasPoint, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, CanvasPoint)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { label, at, .. } => Some((label.as_str(), *at)),
            _ => None,
        })
    }

    pub fn lines_with_color(&self, wanted: Rgba) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { color, .. } if *color == wanted))
            .count()
    }
}

impl Surface for DrawList {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Rgba) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: CanvasPoint, to: CanvasPoint, thickness: f64, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn fill_circle(&mut self, center: CanvasPoint, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, label: &str, at: CanvasPoint, font_size: u16, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            label: label.to_string(),
            at,
            font_size,
            color,
        });
    }
}

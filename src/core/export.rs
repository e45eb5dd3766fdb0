//! PNG snapshots of the scene through plotters.

use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::core::error::{Error, Result};
use crate::core::mapping::CanvasPoint;
use crate::core::surface::{DrawCommand, DrawList, Rgba, Surface};

const FONT_FAMILY: &str = "sans-serif";

/// Labels are positioned by their baseline, like the on-screen backend.
fn label_anchor() -> Pos {
    Pos::new(HPos::Left, VPos::Bottom)
}

pub fn default_snapshot_path() -> PathBuf {
    PathBuf::from(format!("scene-{}.png", Local::now().format("%Y%m%d-%H%M%S")))
}

fn color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.alpha_f64())
}

fn pixel(p: CanvasPoint) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn export_error<E: std::fmt::Display>(path: &Path) -> impl FnOnce(E) -> Error + '_ {
    move |err| Error::Export {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Replays a recorded frame into a PNG the size of the recorded surface.
pub fn write_png(frame: &DrawList, path: &Path) -> Result<()> {
    let (w, h) = (frame.width(), frame.height());
    if w < 1.0 || h < 1.0 {
        return Err(Error::Export {
            path: path.to_path_buf(),
            message: format!("surface {w}x{h} is too small"),
        });
    }

    let root = BitMapBackend::new(path, (w.round() as u32, h.round() as u32)).into_drawing_area();
    for command in frame.commands() {
        match command {
            DrawCommand::Clear(c) => root.fill(&color(*c)).map_err(export_error(path))?,
            DrawCommand::Line {
                from,
                to,
                thickness,
                color: c,
            } => root
                .draw(&PathElement::new(
                    vec![pixel(*from), pixel(*to)],
                    color(*c).stroke_width(thickness.round().max(1.0) as u32),
                ))
                .map_err(export_error(path))?,
            DrawCommand::FillCircle {
                center,
                radius,
                color: c,
            } => root
                .draw(&Circle::new(
                    pixel(*center),
                    radius.round().max(1.0) as i32,
                    color(*c).filled(),
                ))
                .map_err(export_error(path))?,
            DrawCommand::Text {
                label,
                at,
                font_size,
                color: c,
            } => root
                .draw(&Text::new(
                    label.clone(),
                    pixel(*at),
                    (FONT_FAMILY, f64::from(*font_size))
                        .into_font()
                        .color(&color(*c))
                        .pos(label_anchor()),
                ))
                .map_err(export_error(path))?,
        }
    }
    root.present().map_err(export_error(path))?;

    info!(path = %path.display(), "scene exported");
    Ok(())
}

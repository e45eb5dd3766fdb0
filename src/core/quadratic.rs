use crate::core::mapping::{CanvasPoint, CoordinateMapper};

pub const PREVIEW_DASH_PX: f64 = 5.0;
pub const PREVIEW_GAP_PX: f64 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x * x) + (self.b * x) + self.c
    }
}

/// Canvas polyline of the parabola for x = 0, 1, 2, ...
///
/// The x = 0 point is always kept. Sampling stops before the first later
/// point that leaves the surface through the right, bottom or top edge.
pub fn preview_points(
    coefficients: Coefficients,
    mapper: &CoordinateMapper,
    surface_w: f64,
    surface_h: f64,
) -> Vec<CanvasPoint> {
    let mut points = vec![mapper.to_canvas(0.0, coefficients.c)];
    let mut math_x = 1.0;
    while math_x < surface_w {
        let p = mapper.to_canvas(math_x, coefficients.eval(math_x));
        if p.x > surface_w || p.y > surface_h || p.y < 0.0 {
            break;
        }
        points.push(p);
        math_x += 1.0;
    }
    points
}

/// Splits a polyline into the "on" pieces of a dash pattern. The dash phase
/// carries across vertices, like a canvas line dash does.
pub fn dashed_segments(
    points: &[CanvasPoint],
    dash: f64,
    gap: f64,
) -> Vec<(CanvasPoint, CanvasPoint)> {
    let mut segments = Vec::new();
    if points.len() < 2 || dash <= 0.0 {
        return segments;
    }

    let period = dash + gap.max(0.0);
    let mut phase = 0.0;
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let len = from.distance(to);
        if !len.is_finite() || len <= f64::EPSILON {
            continue;
        }

        let mut travelled = 0.0;
        while travelled < len {
            let in_dash = phase < dash;
            let boundary = if in_dash { dash - phase } else { period - phase };
            let advance = boundary.min(len - travelled);
            if in_dash && advance > 0.0 {
                segments.push((
                    from.lerp(to, travelled / len),
                    from.lerp(to, (travelled + advance) / len),
                ));
            }
            travelled += advance;
            phase += advance;
            if phase >= period {
                phase -= period;
            }
        }
    }
    segments
}

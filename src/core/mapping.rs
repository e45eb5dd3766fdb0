pub const DEFAULT_ORIGIN: CanvasPoint = CanvasPoint { x: 50.0, y: 550.0 };

/// Position in math space: origin at the mapper's offset, y grows upward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MathPoint {
    pub x: f64,
    pub y: f64,
}

impl MathPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Position in surface pixels: origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    origin: CanvasPoint,
}

impl CoordinateMapper {
    pub const fn new(origin: CanvasPoint) -> Self {
        Self { origin }
    }

    pub const fn origin(&self) -> CanvasPoint {
        self.origin
    }

    pub fn to_canvas(&self, math_x: f64, math_y: f64) -> CanvasPoint {
        CanvasPoint::new(self.origin.x + math_x, self.origin.y - math_y)
    }

    pub fn point_to_canvas(&self, point: MathPoint) -> CanvasPoint {
        self.to_canvas(point.x, point.y)
    }

    pub fn to_math(&self, canvas: CanvasPoint) -> MathPoint {
        MathPoint::new(canvas.x - self.origin.x, self.origin.y - canvas.y)
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

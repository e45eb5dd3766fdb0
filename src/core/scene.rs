use crate::core::mapping::{CanvasPoint, CoordinateMapper};
use crate::core::quadratic::{
    Coefficients, PREVIEW_DASH_PX, PREVIEW_GAP_PX, dashed_segments, preview_points,
};
use crate::core::surface::{Rgba, Surface};
use crate::core::target::Target;

pub const TICK_SPACING: f64 = 50.0;
const TICK_HALF_LEN: f64 = 5.0;
const LABEL_FONT_SIZE: u16 = 12;

pub const BACKGROUND: Rgba = Rgba::WHITE;
pub const AXIS_COLOR: Rgba = Rgba::rgb(204, 204, 204);
pub const LABEL_COLOR: Rgba = Rgba::rgb(136, 136, 136);
pub const TARGET_COLOR: Rgba = Rgba::rgb(76, 175, 80);
pub const TARGET_DETAIL_COLOR: Rgba = Rgba::WHITE;
pub const BIRD_COLOR: Rgba = Rgba::rgb(211, 47, 47);
pub const PREVIEW_COLOR: Rgba = Rgba::rgba(0, 86, 179, 128);

/// Bird as currently drawn, in math coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Projectile {
    pub const fn at_rest(c: f64, radius: f64) -> Self {
        Self { x: 0.0, y: c, radius }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SceneRenderer {
    mapper: CoordinateMapper,
}

impl SceneRenderer {
    pub const fn new(mapper: CoordinateMapper) -> Self {
        Self { mapper }
    }

    pub const fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn draw_axes<S: Surface>(&self, surface: &mut S) {
        let origin = self.mapper.origin();
        let (w, h) = (surface.width(), surface.height());

        surface.line(
            CanvasPoint::new(origin.x, 0.0),
            CanvasPoint::new(origin.x, h),
            1.0,
            AXIS_COLOR,
        );
        surface.line(
            CanvasPoint::new(0.0, origin.y),
            CanvasPoint::new(w, origin.y),
            1.0,
            AXIS_COLOR,
        );

        let mut x = TICK_SPACING;
        while x <= w - origin.x {
            let pos = self.mapper.to_canvas(x, 0.0);
            surface.text(
                &format_tick(x),
                CanvasPoint::new(pos.x - 8.0, origin.y + 15.0),
                LABEL_FONT_SIZE,
                LABEL_COLOR,
            );
            surface.line(
                pos.offset(0.0, -TICK_HALF_LEN),
                pos.offset(0.0, TICK_HALF_LEN),
                1.0,
                AXIS_COLOR,
            );
            x += TICK_SPACING;
        }

        let mut y = TICK_SPACING;
        while y <= origin.y {
            let pos = self.mapper.to_canvas(0.0, y);
            surface.text(
                &format_tick(y),
                CanvasPoint::new(origin.x - 25.0, pos.y + 4.0),
                LABEL_FONT_SIZE,
                LABEL_COLOR,
            );
            surface.line(
                pos.offset(-TICK_HALF_LEN, 0.0),
                pos.offset(TICK_HALF_LEN, 0.0),
                1.0,
                AXIS_COLOR,
            );
            y += TICK_SPACING;
        }
    }

    pub fn draw_target<S: Surface>(&self, surface: &mut S, target: &Target) {
        let center = self.mapper.to_canvas(target.x, target.y);
        surface.fill_circle(center, target.radius, TARGET_COLOR);
        surface.fill_circle(center.offset(-5.0, -5.0), 3.0, TARGET_DETAIL_COLOR);
        surface.fill_circle(center.offset(5.0, -5.0), 3.0, TARGET_DETAIL_COLOR);
    }

    pub fn draw_projectile<S: Surface>(&self, surface: &mut S, at: CanvasPoint, radius: f64) {
        surface.fill_circle(at, radius, BIRD_COLOR);
    }

    pub fn draw_parabola_preview<S: Surface>(&self, surface: &mut S, coefficients: Coefficients) {
        let points = preview_points(
            coefficients,
            &self.mapper,
            surface.width(),
            surface.height(),
        );
        for (from, to) in dashed_segments(&points, PREVIEW_DASH_PX, PREVIEW_GAP_PX) {
            surface.line(from, to, 2.0, PREVIEW_COLOR);
        }
    }

    /// Frame of an in-flight step: no preview, bird wherever the step put it.
    pub fn draw_flight_frame<S: Surface>(
        &self,
        surface: &mut S,
        target: &Target,
        bird_at: CanvasPoint,
        bird_radius: f64,
    ) {
        surface.clear(BACKGROUND);
        self.draw_axes(surface);
        self.draw_target(surface, target);
        self.draw_projectile(surface, bird_at, bird_radius);
    }

    pub fn draw_scene<S: Surface>(
        &self,
        surface: &mut S,
        coefficients: Coefficients,
        target: &Target,
        bird: &Projectile,
    ) {
        surface.clear(BACKGROUND);
        self.draw_axes(surface);
        self.draw_target(surface, target);
        self.draw_parabola_preview(surface, coefficients);
        let rest = self.mapper.to_canvas(bird.x, bird.y);
        self.draw_projectile(surface, rest, bird.radius);
    }
}

fn format_tick(value: f64) -> String {
    format!("{value:.0}")
}

#[cfg(test)]
mod tests {
    use super::{
        AXIS_COLOR, BIRD_COLOR, PREVIEW_COLOR, Projectile, SceneRenderer, TARGET_COLOR,
    };
    use crate::core::mapping::{CanvasPoint, CoordinateMapper};
    use crate::core::quadratic::Coefficients;
    use crate::core::surface::{DrawCommand, DrawList};
    use crate::core::target::{BIRD_RADIUS, Target};

    fn renderer() -> SceneRenderer {
        SceneRenderer::new(CoordinateMapper::default())
    }

    #[test]
    fn axis_labels_show_math_values_at_mapped_positions() {
        let mut surface = DrawList::new(800.0, 600.0);
        renderer().draw_axes(&mut surface);

        let labels: Vec<(&str, CanvasPoint)> = surface.labels().collect();
        // x: 50..=750, y: 50..=550
        assert_eq!(labels.len(), 15 + 11);
        assert!(labels.contains(&("50", CanvasPoint::new(92.0, 565.0))));
        assert!(labels.contains(&("750", CanvasPoint::new(792.0, 565.0))));
        assert!(labels.contains(&("100", CanvasPoint::new(25.0, 454.0))));
        assert!(labels.contains(&("550", CanvasPoint::new(25.0, 4.0))));
        assert!(!labels.iter().any(|(label, _)| *label == "0"));
    }

    #[test]
    fn axes_span_the_whole_surface() {
        let mut surface = DrawList::new(800.0, 600.0);
        renderer().draw_axes(&mut surface);

        let first_two: Vec<&DrawCommand> = surface.commands().iter().take(2).collect();
        assert_eq!(
            first_two[0],
            &DrawCommand::Line {
                from: CanvasPoint::new(50.0, 0.0),
                to: CanvasPoint::new(50.0, 600.0),
                thickness: 1.0,
                color: AXIS_COLOR,
            }
        );
        assert_eq!(
            first_two[1],
            &DrawCommand::Line {
                from: CanvasPoint::new(0.0, 550.0),
                to: CanvasPoint::new(800.0, 550.0),
                thickness: 1.0,
                color: AXIS_COLOR,
            }
        );
    }

    #[test]
    fn target_is_a_circle_of_contract_radius_at_mapped_center() {
        let mut surface = DrawList::new(800.0, 600.0);
        renderer().draw_target(&mut surface, &Target::new(500.0, 150.0));

        let circles: Vec<_> = surface.circles().collect();
        assert_eq!(circles[0], (CanvasPoint::new(550.0, 400.0), 20.0, TARGET_COLOR));
        assert_eq!(circles.len(), 3);
    }

    #[test]
    fn static_scene_puts_bird_at_rest_height() {
        let mut surface = DrawList::new(800.0, 600.0);
        let coefficients = Coefficients::new(0.005, -2.0, 100.0);
        renderer().draw_scene(
            &mut surface,
            coefficients,
            &Target::new(500.0, 150.0),
            &Projectile::at_rest(coefficients.c, BIRD_RADIUS),
        );

        let bird: Vec<_> = surface
            .circles()
            .filter(|(_, _, color)| *color == BIRD_COLOR)
            .collect();
        assert_eq!(bird, vec![(CanvasPoint::new(50.0, 450.0), 10.0, BIRD_COLOR)]);
        assert!(surface.lines_with_color(PREVIEW_COLOR) > 0);
    }

    #[test]
    fn flight_frame_has_no_preview() {
        let mut surface = DrawList::new(800.0, 600.0);
        renderer().draw_flight_frame(
            &mut surface,
            &Target::new(500.0, 150.0),
            CanvasPoint::new(90.0, 300.0),
            BIRD_RADIUS,
        );

        assert_eq!(surface.lines_with_color(PREVIEW_COLOR), 0);
        assert!(
            surface
                .circles()
                .any(|c| c == (CanvasPoint::new(90.0, 300.0), 10.0, BIRD_COLOR))
        );
    }
}

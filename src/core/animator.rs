//! Stepped flight of the bird along a frozen parabola.
//!
//! A host drives the flight by calling [`TrajectoryAnimator::step`] once per
//! rendered frame. Each call either continues with the frame it just drew or
//! reports how the flight ended.

use crate::core::mapping::{CanvasPoint, MathPoint};
use crate::core::quadratic::Coefficients;
use crate::core::scene::SceneRenderer;
use crate::core::surface::Surface;
use crate::core::target::Target;

/// Horizontal advance per step, in math units.
pub const FLIGHT_STEP: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightFrame {
    pub step: u64,
    pub math: MathPoint,
    pub canvas: CanvasPoint,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Continue(FlightFrame),
    Done(Outcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FlightHandle(u64);

#[derive(Clone, Copy, Debug)]
struct Flight {
    handle: FlightHandle,
    coefficients: Coefficients,
    math_x: f64,
    steps: u64,
}

#[derive(Debug, Default)]
pub struct TrajectoryAnimator {
    flight: Option<Flight>,
    launches: u64,
}

impl TrajectoryAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.flight.is_some()
    }

    pub fn is_live(&self, handle: FlightHandle) -> bool {
        self.flight.is_some_and(|f| f.handle == handle)
    }

    pub fn frozen_coefficients(&self) -> Option<Coefficients> {
        self.flight.map(|f| f.coefficients)
    }

    pub fn launch(&mut self, coefficients: Coefficients) -> FlightHandle {
        self.cancel();
        self.launches += 1;
        let handle = FlightHandle(self.launches);
        self.flight = Some(Flight {
            handle,
            coefficients,
            math_x: 0.0,
            steps: 0,
        });
        handle
    }

    pub fn cancel(&mut self) -> Option<Outcome> {
        self.flight.take().map(|_| Outcome::Cancelled)
    }

    /// Runs one step of the live flight. Returns `None` when idle.
    pub fn step<S: Surface>(
        &mut self,
        renderer: &SceneRenderer,
        target: &Target,
        bird_radius: f64,
        surface: &mut S,
    ) -> Option<Step> {
        let flight = self.flight.as_mut()?;

        let math = MathPoint::new(flight.math_x, flight.coefficients.eval(flight.math_x));
        let canvas = renderer.mapper().point_to_canvas(math);
        renderer.draw_flight_frame(surface, target, canvas, bird_radius);
        let frame = FlightFrame {
            step: flight.steps,
            math,
            canvas,
        };
        flight.steps += 1;

        if target.is_hit_by(math, bird_radius) {
            self.flight = None;
            return Some(Step::Done(Outcome::Hit));
        }

        flight.math_x += FLIGHT_STEP;

        // Judged on the frame just drawn, not on the advanced x.
        if canvas.x > surface.width() || canvas.y > surface.height() {
            self.flight = None;
            return Some(Step::Done(Outcome::Miss));
        }

        Some(Step::Continue(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::{FLIGHT_STEP, Outcome, Step, TrajectoryAnimator};
    use crate::core::mapping::CoordinateMapper;
    use crate::core::quadratic::Coefficients;
    use crate::core::scene::SceneRenderer;
    use crate::core::surface::DrawList;
    use crate::core::target::{BIRD_RADIUS, Target};

    fn run_to_end(
        animator: &mut TrajectoryAnimator,
        target: &Target,
        surface: &mut DrawList,
    ) -> (Vec<f64>, Outcome) {
        let renderer = SceneRenderer::new(CoordinateMapper::default());
        let mut xs = Vec::new();
        loop {
            match animator
                .step(&renderer, target, BIRD_RADIUS, surface)
                .expect("flight should be running")
            {
                Step::Continue(frame) => xs.push(frame.math.x),
                Step::Done(outcome) => return (xs, outcome),
            }
        }
    }

    #[test]
    fn flat_line_steps_in_fixed_increments() {
        let renderer = SceneRenderer::new(CoordinateMapper::default());
        let mut surface = DrawList::new(800.0, 600.0);
        let mut animator = TrajectoryAnimator::new();
        let target = Target::new(650.0, 390.0);
        animator.launch(Coefficients::new(0.0, 0.0, 50.0));

        for i in 0..5 {
            let Some(Step::Continue(frame)) =
                animator.step(&renderer, &target, BIRD_RADIUS, &mut surface)
            else {
                panic!("flight ended early at step {i}");
            };
            assert_eq!(frame.step, i);
            assert_eq!(frame.math.x, FLIGHT_STEP * i as f64);
            assert_eq!(frame.math.y, 50.0);
        }
    }

    #[test]
    fn flat_line_misses_when_leaving_the_right_edge() {
        let mut surface = DrawList::new(800.0, 600.0);
        let mut animator = TrajectoryAnimator::new();
        animator.launch(Coefficients::new(0.0, 0.0, 50.0));

        let (xs, outcome) = run_to_end(&mut animator, &Target::new(650.0, 390.0), &mut surface);

        assert_eq!(outcome, Outcome::Miss);
        assert!(xs.windows(2).all(|w| w[1] - w[0] == FLIGHT_STEP));
        // last judged frame was at canvas x = 50 + 752 > 800
        assert_eq!(xs.last().copied(), Some(748.0));
        assert!(!animator.is_running());
    }

    #[test]
    fn hits_target_sitting_on_the_path() {
        let mut surface = DrawList::new(800.0, 600.0);
        let mut animator = TrajectoryAnimator::new();
        animator.launch(Coefficients::new(0.0, 0.0, 150.0));

        let (xs, outcome) = run_to_end(&mut animator, &Target::new(500.0, 150.0), &mut surface);

        assert_eq!(outcome, Outcome::Hit);
        // first x with |x - 500| < 30 is 472
        assert_eq!(xs.last().copied(), Some(468.0));
        assert!(!animator.is_running());
        assert_eq!(animator.frozen_coefficients(), None);
    }

    #[test]
    fn falling_curve_misses_through_the_bottom_once() {
        let renderer = SceneRenderer::new(CoordinateMapper::default());
        let mut surface = DrawList::new(800.0, 600.0);
        let mut animator = TrajectoryAnimator::new();
        animator.launch(Coefficients::new(0.0, -1.0, 0.0));

        let (_, outcome) = run_to_end(&mut animator, &Target::new(650.0, 390.0), &mut surface);
        assert_eq!(outcome, Outcome::Miss);
        assert_eq!(
            animator.step(&renderer, &Target::new(650.0, 390.0), BIRD_RADIUS, &mut surface),
            None
        );
    }

    #[test]
    fn relaunch_invalidates_previous_flight() {
        let renderer = SceneRenderer::new(CoordinateMapper::default());
        let mut surface = DrawList::new(800.0, 600.0);
        let mut animator = TrajectoryAnimator::new();
        let target = Target::new(650.0, 390.0);

        let first = animator.launch(Coefficients::new(0.0, 0.0, 50.0));
        for _ in 0..3 {
            animator.step(&renderer, &target, BIRD_RADIUS, &mut surface);
        }
        let second = animator.launch(Coefficients::new(0.0, 0.0, 80.0));

        assert!(!animator.is_live(first));
        assert!(animator.is_live(second));
        let Some(Step::Continue(frame)) =
            animator.step(&renderer, &target, BIRD_RADIUS, &mut surface)
        else {
            panic!("second flight should be running");
        };
        assert_eq!(frame.math.x, 0.0);
        assert_eq!(frame.math.y, 80.0);
    }

    #[test]
    fn cancel_reports_only_when_running() {
        let mut animator = TrajectoryAnimator::new();
        assert_eq!(animator.cancel(), None);

        let handle = animator.launch(Coefficients::new(0.0, 1.0, 0.0));
        assert_eq!(animator.cancel(), Some(Outcome::Cancelled));
        assert!(!animator.is_live(handle));
        assert!(!animator.is_running());
    }
}

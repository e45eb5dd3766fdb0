use rand::Rng;
use tracing::{debug, info, trace};

use crate::core::animator::{FlightHandle, Outcome, Step, TrajectoryAnimator};
use crate::core::config::GameConfig;
use crate::core::quadratic::Coefficients;
use crate::core::readout::{self, Status};
use crate::core::scene::{Projectile, SceneRenderer};
use crate::core::surface::{DrawList, Surface};
use crate::core::target::{BIRD_RADIUS, Target, TargetSpawner};

/// One game: the target, the bird, the live slider values and the flight
/// in progress, if any.
pub struct GameSession<R> {
    renderer: SceneRenderer,
    spawner: TargetSpawner,
    target: Target,
    bird: Projectile,
    coefficients: Coefficients,
    animator: TrajectoryAnimator,
    status: Status,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: &GameConfig, rng: R) -> Self {
        let coefficients = config.coefficients();
        Self {
            renderer: SceneRenderer::new(config.mapper()),
            spawner: TargetSpawner::new(),
            target: config.initial_target(),
            bird: Projectile::at_rest(coefficients.c, BIRD_RADIUS),
            coefficients,
            animator: TrajectoryAnimator::new(),
            status: Status::Idle,
            rng,
        }
    }

    pub fn renderer(&self) -> &SceneRenderer {
        &self.renderer
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn projectile(&self) -> &Projectile {
        &self.bird
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_flying(&self) -> bool {
        self.animator.is_running()
    }

    pub fn is_live(&self, handle: FlightHandle) -> bool {
        self.animator.is_live(handle)
    }

    /// Live values only; a flight in progress keeps its launch snapshot.
    pub fn set_coefficients(&mut self, coefficients: Coefficients) {
        self.coefficients = coefficients;
        if !self.animator.is_running() {
            self.bird = Projectile::at_rest(coefficients.c, BIRD_RADIUS);
        }
    }

    pub fn equation_text(&self) -> String {
        readout::equation_text(self.coefficients)
    }

    pub fn target_text(&self) -> String {
        readout::target_text(&self.target)
    }

    pub fn status_text(&self) -> &'static str {
        self.status.message()
    }

    pub fn launch(&mut self) -> FlightHandle {
        if self.animator.is_running() {
            debug!("superseding flight in progress");
        }
        let handle = self.animator.launch(self.coefficients);
        self.bird = Projectile::at_rest(self.coefficients.c, BIRD_RADIUS);
        self.status = Status::Launching;
        info!(
            a = self.coefficients.a,
            b = self.coefficients.b,
            c = self.coefficients.c,
            "launch"
        );
        handle
    }

    /// One step of the current flight. On a hit or miss the static scene is
    /// redrawn before returning.
    pub fn advance<S: Surface>(&mut self, surface: &mut S) -> Option<Step> {
        let step = self
            .animator
            .step(&self.renderer, &self.target, self.bird.radius, surface)?;

        match step {
            Step::Continue(frame) => {
                self.bird.x = frame.math.x;
                self.bird.y = frame.math.y;
                trace!(step = frame.step, x = frame.math.x, y = frame.math.y, "flight step");
            }
            Step::Done(Outcome::Hit) => {
                info!(x = self.target.x, y = self.target.y, "target hit");
                self.status = Status::Hit;
                self.respawn_target();
                self.draw_scene(surface);
            }
            Step::Done(Outcome::Miss) => {
                info!("missed: bird left the surface");
                self.status = Status::Miss;
                self.draw_scene(surface);
            }
            Step::Done(Outcome::Cancelled) => {}
        }
        Some(step)
    }

    pub fn reset<S: Surface>(&mut self, surface: &mut S) {
        if self.animator.cancel().is_some() {
            info!("flight cancelled");
        }
        self.status = Status::Idle;
        self.respawn_target();
        self.draw_scene(surface);
    }

    pub fn draw_scene<S: Surface>(&mut self, surface: &mut S) {
        self.bird = Projectile::at_rest(self.coefficients.c, BIRD_RADIUS);
        self.renderer
            .draw_scene(surface, self.coefficients, &self.target, &self.bird);
    }

    /// Static scene recorded off-screen, for export.
    pub fn snapshot(&self, width: f64, height: f64) -> DrawList {
        let mut frame = DrawList::new(width, height);
        let rest = Projectile::at_rest(self.coefficients.c, BIRD_RADIUS);
        self.renderer
            .draw_scene(&mut frame, self.coefficients, &self.target, &rest);
        frame
    }

    /// One host frame: a flight step while flying, the static scene otherwise.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Option<Step> {
        if self.animator.is_running() {
            self.advance(surface)
        } else {
            self.draw_scene(surface);
            None
        }
    }

    fn respawn_target(&mut self) {
        self.target = self.spawner.spawn(&mut self.rng);
        debug!(x = self.target.x, y = self.target.y, "new target");
    }
}

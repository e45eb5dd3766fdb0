use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use parabolic_target::core::config::GameConfig;
use parabolic_target::core::quadratic::Coefficients;
use parabolic_target::core::session::GameSession;

use crate::constants::{A_STEP, B_STEP, C_STEP};

#[derive(Clone, Copy)]
pub(crate) struct SliderValues {
    pub(crate) a: f32,
    pub(crate) b: f32,
    pub(crate) c: f32,
}

fn snap(value: f32, step: f64) -> f64 {
    (f64::from(value) / step).round() * step + 0.0
}

impl SliderValues {
    fn from_coefficients(coefficients: Coefficients) -> Self {
        Self {
            a: coefficients.a as f32,
            b: coefficients.b as f32,
            c: coefficients.c as f32,
        }
    }

    pub(crate) fn coefficients(self) -> Coefficients {
        Coefficients::new(snap(self.a, A_STEP), snap(self.b, B_STEP), snap(self.c, C_STEP))
    }
}

pub(crate) struct AppRuntime {
    pub(crate) config: GameConfig,
    pub(crate) session: GameSession<StdRng>,
    pub(crate) sliders: SliderValues,
}

impl AppRuntime {
    pub(crate) fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = GameSession::new(&config, rng);
        let sliders = SliderValues::from_coefficients(session.coefficients());
        Self {
            config,
            session,
            sliders,
        }
    }

    pub(crate) fn canvas_size(&self) -> (f64, f64) {
        (self.config.surface_width, self.config.surface_height)
    }

    /// Pushes slider values into the session when they moved.
    pub(crate) fn sync_sliders(&mut self) {
        let coefficients = self.sliders.coefficients();
        if coefficients != self.session.coefficients() {
            self.session.set_coefficients(coefficients);
        }
    }
}

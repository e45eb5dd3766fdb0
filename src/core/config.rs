use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{Error, Result};
use crate::core::mapping::{CanvasPoint, CoordinateMapper, DEFAULT_ORIGIN};
use crate::core::quadratic::Coefficients;
use crate::core::target::Target;

pub const DEFAULT_SURFACE_WIDTH: f64 = 800.0;
pub const DEFAULT_SURFACE_HEIGHT: f64 = 600.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub surface_width: f64,
    pub surface_height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub initial_target_x: f64,
    pub initial_target_y: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            origin_x: DEFAULT_ORIGIN.x,
            origin_y: DEFAULT_ORIGIN.y,
            initial_target_x: 500.0,
            initial_target_y: 150.0,
            a: -0.005,
            b: 2.0,
            c: 50.0,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{label} must be a positive number, got {value}"
                )));
            }
        }
        for (label, value) in [
            ("origin_x", self.origin_x),
            ("origin_y", self.origin_y),
            ("initial_target_x", self.initial_target_x),
            ("initial_target_y", self.initial_target_y),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "{label} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(CanvasPoint::new(self.origin_x, self.origin_y))
    }

    pub fn coefficients(&self) -> Coefficients {
        Coefficients::new(self.a, self.b, self.c)
    }

    pub fn initial_target(&self) -> Target {
        Target::new(self.initial_target_x, self.initial_target_y)
    }
}

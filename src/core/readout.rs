use crate::core::quadratic::Coefficients;
use crate::core::target::Target;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Launching,
    Hit,
    Miss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Failure,
}

impl Status {
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Launching => "Launching...",
            Self::Hit => "Hit! Well done!",
            Self::Miss => "Missed! Try again.",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Idle | Self::Launching => Tone::Neutral,
            Self::Hit => Tone::Success,
            Self::Miss => Tone::Failure,
        }
    }
}

fn sign(value: f64) -> char {
    if value >= 0.0 { '+' } else { '-' }
}

/// Fixed-point text with exact halves rounded away from zero and no
/// negative zero.
fn fixed(value: f64, decimals: usize) -> String {
    let value = value + 0.0;
    let halves = value.abs() * 2f64.powi(decimals as i32 + 1);
    if halves.fract() == 0.0 && halves % 2.0 == 1.0 {
        let scale = 10f64.powi(decimals as i32);
        let rounded = (value * scale).round() / scale;
        return format!("{rounded:.decimals$}");
    }
    format!("{value:.decimals$}")
}

pub fn equation_text(coefficients: Coefficients) -> String {
    let Coefficients { a, b, c } = coefficients;
    format!(
        "y = {}x² {} {}x {} {}",
        fixed(a, 3),
        sign(b),
        fixed(b.abs(), 1),
        sign(c),
        fixed(c.abs(), 1)
    )
}

pub fn target_text(target: &Target) -> String {
    format!("Target: ({}, {})", target.x, target.y)
}

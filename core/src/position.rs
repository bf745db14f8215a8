use std::fmt;

pub const DEFAULT_POSITION: f64 = 0.5;
pub const KEY_STEP: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SplitPosition(f64);

impl SplitPosition {
    pub const MIN: SplitPosition = SplitPosition(0.0);
    pub const MAX: SplitPosition = SplitPosition(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            Self::MIN
        } else if value >= 1.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        (self.0 * 10000.0).round() / 100.0
    }

    pub fn offset(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    // Strict parse: "0.3px" and "Infinity" fall back to the default.
    pub fn from_attribute(value: Option<&str>) -> Self {
        let parsed = value
            .map(str::trim)
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|value| value.is_finite());
        Self::new(parsed.unwrap_or(DEFAULT_POSITION))
    }
}

impl Default for SplitPosition {
    fn default() -> Self {
        Self(DEFAULT_POSITION)
    }
}

impl fmt::Display for SplitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.percent().fmt(f)
    }
}

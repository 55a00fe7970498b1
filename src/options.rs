use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("tolerance must not be negative, got {0}")]
    NegativeTolerance(i64),
    #[error("invalid tolerance {0:?}: expected a count like `3` or a percentage like `25%`")]
    InvalidTolerance(String),
    #[error("options config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// How a tolerance value is turned into an allowed edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Absolute,
    Percentage,
}

/// A tolerance together with its unit, as written on a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    pub unit: Unit,
    pub value: usize,
}

impl FromStr for Tolerance {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let (unit, digits) = match t.strip_suffix('%') {
            Some(rest) => (Unit::Percentage, rest.trim_end()),
            None => (Unit::Absolute, t),
        };
        let value: i64 = digits
            .parse()
            .map_err(|_| OptionsError::InvalidTolerance(s.to_string()))?;
        if value < 0 {
            return Err(OptionsError::NegativeTolerance(value));
        }
        Ok(Tolerance { unit, value: value as usize })
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Absolute => write!(f, "{}", self.value),
            Unit::Percentage => write!(f, "{}%", self.value),
        }
    }
}

/// Grouping configuration. Immutable once built; a negative tolerance is
/// rejected here rather than during clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawOptions")]
pub struct Options {
    unit: Unit,
    tolerance: usize,
    strip_digits: bool,
    strip_identifiers: bool,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawOptions {
    unit: Unit,
    tolerance: i64,
    strip_digits: bool,
    strip_identifiers: bool,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self { unit: Unit::Absolute, tolerance: 0, strip_digits: false, strip_identifiers: false }
    }
}

impl TryFrom<RawOptions> for Options {
    type Error = OptionsError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        Ok(Options::new(raw.unit, raw.tolerance)?
            .with_strip_digits(raw.strip_digits)
            .with_strip_identifiers(raw.strip_identifiers))
    }
}

impl Options {
    pub fn new(unit: Unit, tolerance: i64) -> Result<Self, OptionsError> {
        if tolerance < 0 {
            return Err(OptionsError::NegativeTolerance(tolerance));
        }
        Ok(Self { unit, tolerance: tolerance as usize, strip_digits: false, strip_identifiers: false })
    }

    pub fn absolute(tolerance: usize) -> Self {
        Self { unit: Unit::Absolute, tolerance, ..Default::default() }
    }

    pub fn percentage(tolerance: usize) -> Self {
        Self { unit: Unit::Percentage, tolerance, ..Default::default() }
    }

    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_strip_digits(mut self, on: bool) -> Self {
        self.strip_digits = on;
        self
    }

    pub fn with_strip_identifiers(mut self, on: bool) -> Self {
        self.strip_identifiers = on;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.unit = tolerance.unit;
        self.tolerance = tolerance.value;
        self
    }

    pub fn unit(&self) -> Unit { self.unit }
    pub fn tolerance(&self) -> usize { self.tolerance }
    pub fn strip_digits(&self) -> bool { self.strip_digits }
    pub fn strip_identifiers(&self) -> bool { self.strip_identifiers }

    /// Allowed distance between two keys under these options.
    pub fn allowed_distance(&self, a: &str, b: &str) -> usize {
        allowed_distance(self.unit, self.tolerance, a, b)
    }
}

#[derive(Debug, Default)]
pub struct OptionsBuilder {
    inner: Options,
}

impl OptionsBuilder {
    pub fn absolute(mut self, tolerance: usize) -> Self {
        self.inner.unit = Unit::Absolute;
        self.inner.tolerance = tolerance;
        self
    }

    pub fn percentage(mut self, tolerance: usize) -> Self {
        self.inner.unit = Unit::Percentage;
        self.inner.tolerance = tolerance;
        self
    }

    pub fn strip_digits(mut self, on: bool) -> Self {
        self.inner.strip_digits = on;
        self
    }

    pub fn strip_identifiers(mut self, on: bool) -> Self {
        self.inner.strip_identifiers = on;
        self
    }

    pub fn build(self) -> Options {
        self.inner
    }
}

/// Converts a tolerance into an absolute edit budget for the pair `a`, `b`.
///
/// Percentages are taken of the longer key's char count and truncated:
/// `max_len * tolerance / 100` in integer arithmetic.
pub fn allowed_distance(unit: Unit, tolerance: usize, a: &str, b: &str) -> usize {
    match unit {
        Unit::Absolute => tolerance,
        Unit::Percentage => {
            let max_len = a.chars().count().max(b.chars().count());
            max_len.saturating_mul(tolerance) / 100
        }
    }
}

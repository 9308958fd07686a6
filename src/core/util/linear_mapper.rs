use std::error::Error;
use std::fmt;

use crate::core::data::interval::Interval;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LinearMapperError {
    DivisionByZero { interval: Interval },
}

impl fmt::Display for LinearMapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { interval } => {
                write!(
                    f,
                    "cannot map from degenerate interval {}: endpoints must differ",
                    interval
                )
            }
        }
    }
}

impl Error for LinearMapperError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MapperOutput {
    #[default]
    Real,
    /// Truncate toward zero after mapping.
    Integer,
}

/// Affine map `f(x) = m*x + b` from one interval onto another.
///
/// Slope and intercept are fixed at construction, so `f(from.low) == to.low`
/// and `f(from.high) == to.high` up to rounding (or truncation in
/// [`MapperOutput::Integer`] mode).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearMapper {
    from: Interval,
    to: Interval,
    slope: f64,
    intercept: f64,
    output: MapperOutput,
}

impl LinearMapper {
    pub fn new(from: Interval, to: Interval, output: MapperOutput) -> Result<Self, LinearMapperError> {
        if from.is_degenerate() {
            return Err(LinearMapperError::DivisionByZero { interval: from });
        }

        let slope = to.width() / from.width();
        let intercept = to.low - slope * from.low;

        Ok(Self {
            from,
            to,
            slope,
            intercept,
            output,
        })
    }

    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let mapped = self.slope * value + self.intercept;

        match self.output {
            MapperOutput::Real => mapped,
            MapperOutput::Integer => mapped.trunc(),
        }
    }

    /// Mapper running the other way, `to -> from`, with real output.
    pub fn inverse(&self) -> Result<Self, LinearMapperError> {
        Self::new(self.to, self.from, MapperOutput::Real)
    }

    #[must_use]
    pub fn domain(&self) -> Interval {
        self.from
    }

    #[must_use]
    pub fn range(&self) -> Interval {
        self.to
    }

    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[must_use]
    pub fn output(&self) -> MapperOutput {
        self.output
    }
}

pub fn make_linear_mapper(
    from: Interval,
    to: Interval,
    integer_output: bool,
) -> Result<LinearMapper, LinearMapperError> {
    let output = if integer_output {
        MapperOutput::Integer
    } else {
        MapperOutput::Real
    };

    LinearMapper::new(from, to, output)
}

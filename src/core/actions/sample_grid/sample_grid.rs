use std::error::Error;
use std::fmt;

use crate::core::actions::sample_grid::ports::point_evaluator::PointEvaluator;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::{EscapeResult, GridSample};
use crate::core::data::interval::Interval;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GridError {
    InvalidStep { step: f64 },
    NonFiniteInterval { interval: Interval },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep { step } => {
                write!(f, "sampling step must be a positive number, got {}", step)
            }
            Self::NonFiniteInterval { interval } => {
                write!(f, "cannot sample non-finite interval {}", interval)
            }
        }
    }
}

impl Error for GridError {}

/// Lattice indices `k` such that `k * step` is sampled along one axis.
///
/// Runs from `floor(low / step)` up to but excluding `floor(high / step)`, so
/// the high end of the interval is never sampled and any partial step at the
/// top is dropped.
pub fn axis_indices(interval: Interval, step: f64) -> Result<std::ops::Range<i64>, GridError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(GridError::InvalidStep { step });
    }

    if !interval.is_finite() {
        return Err(GridError::NonFiniteInterval { interval });
    }

    let first = (interval.low / step).floor() as i64;
    let end = (interval.high / step).floor() as i64;

    Ok(first..end.max(first))
}

/// Sample values along one axis, built from integer indices so no rounding
/// error accumulates from one sample to the next.
pub fn axis_values(interval: Interval, step: f64) -> Result<Vec<f64>, GridError> {
    Ok(axis_indices(interval, step)?
        .map(|k| k as f64 * step)
        .collect())
}

pub(crate) fn grid_points(
    real: Interval,
    imag: Interval,
    step: f64,
) -> Result<Vec<Complex>, GridError> {
    let reals = axis_values(real, step)?;
    let imags = axis_values(imag, step)?;

    Ok(reals
        .iter()
        .flat_map(|&r| imags.iter().map(move |&i| Complex::new(r, i)))
        .collect())
}

/// Evaluates every lattice point of the bounding box in row-major order: all
/// imaginary values for one real value are adjacent.
pub fn sample_grid<Eval>(
    real: Interval,
    imag: Interval,
    step: f64,
    evaluator: &Eval,
) -> Result<Vec<GridSample>, GridError>
where
    Eval: PointEvaluator<Output = EscapeResult>,
{
    let samples = grid_points(real, imag, step)?
        .into_iter()
        .map(|point| GridSample {
            point,
            result: evaluator.evaluate(point),
        })
        .inspect(|sample| log::debug!("{}", sample))
        .collect();

    Ok(samples)
}

use rayon::prelude::*;

use crate::core::actions::sample_grid::ports::point_evaluator::PointEvaluator;
use crate::core::actions::sample_grid::sample_grid::{GridError, grid_points};
use crate::core::data::escape_result::{EscapeResult, GridSample};
use crate::core::data::interval::Interval;

/// Evaluates the lattice in parallel using rayon's work-stealing scheduler.
///
/// Samples are independent, so the only coordination needed is the ordered
/// collect; the result is identical to [`sample_grid`](super::sample_grid::sample_grid).
pub fn sample_grid_rayon<Eval>(
    real: Interval,
    imag: Interval,
    step: f64,
    evaluator: &Eval,
) -> Result<Vec<GridSample>, GridError>
where
    Eval: PointEvaluator<Output = EscapeResult> + Sync,
{
    let samples: Vec<GridSample> = grid_points(real, imag, step)?
        .into_par_iter()
        .map(|point| GridSample {
            point,
            result: evaluator.evaluate(point),
        })
        .collect();

    if log::log_enabled!(log::Level::Debug) {
        for sample in &samples {
            log::debug!("{}", sample);
        }
    }

    Ok(samples)
}

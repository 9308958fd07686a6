use crate::core::data::complex::Complex;

/// Evaluates a single sample of the complex plane.
///
/// Implementations must be pure: the grid samplers call `evaluate` in any
/// order and, for the rayon sampler, from several threads.
pub trait PointEvaluator {
    type Output;

    fn evaluate(&self, point: Complex) -> Self::Output;
}

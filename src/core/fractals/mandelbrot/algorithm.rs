use crate::core::actions::sample_grid::ports::point_evaluator::PointEvaluator;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 20;
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Iterates `z = z² + c` starting from `z = c` and reports whether `|z|`
/// stayed within `threshold` for `max_iterations` steps.
///
/// The first iterate checked is `c² + c`, so escape counts run one step
/// ahead of the textbook `z = 0` start.
#[must_use]
pub fn evaluate(c: Complex, max_iterations: u32, threshold: f64) -> EscapeResult {
    let mut z = c;

    for iteration in 0..max_iterations {
        z = z.square() + c;

        if z.magnitude() > threshold {
            return EscapeResult {
                bounded: false,
                final_value: z,
                iterations_used: iteration,
            };
        }
    }

    EscapeResult {
        bounded: true,
        final_value: z,
        iterations_used: max_iterations.saturating_sub(1),
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    max_iterations: u32,
    threshold: f64,
}

impl EscapeTimeAlgorithm {
    pub fn new(max_iterations: u32, threshold: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(MandelbrotError::InvalidThresholdError { threshold });
        }

        Ok(Self {
            max_iterations,
            threshold,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for EscapeTimeAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl PointEvaluator for EscapeTimeAlgorithm {
    type Output = EscapeResult;

    fn evaluate(&self, point: Complex) -> Self::Output {
        evaluate(point, self.max_iterations, self.threshold)
    }
}

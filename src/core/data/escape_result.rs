use std::fmt;

use crate::core::data::complex::Complex;

/// Outcome of iterating one sample point.
///
/// `bounded` means the iterate never crossed the divergence threshold within
/// the iteration bound. `iterations_used` is the index of the escaping
/// iteration, or `max_iterations - 1` for bounded points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub bounded: bool,
    pub final_value: Complex,
    pub iterations_used: u32,
}

impl fmt::Display for EscapeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.bounded, self.final_value, self.iterations_used
        )
    }
}

/// A sampled point of the complex plane paired with its escape result.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridSample {
    pub point: Complex,
    pub result: EscapeResult,
}

impl fmt::Display for GridSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> {}",
            self.point.real, self.point.imag, self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_sample_diagnostic_line() {
        let sample = GridSample {
            point: Complex::new(2.0, 0.0),
            result: EscapeResult {
                bounded: false,
                final_value: Complex::new(6.0, 0.0),
                iterations_used: 0,
            },
        };

        assert_eq!(sample.to_string(), "(2, 0) -> (false, (6+0i), 0)");
    }
}

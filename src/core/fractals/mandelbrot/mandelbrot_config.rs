use std::error::Error;
use std::fmt;

use crate::core::actions::render_samples::render_samples::PixelMapping;
use crate::core::data::interval::Interval;
use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD, EscapeTimeAlgorithm,
};
use crate::core::fractals::mandelbrot::colour_map::EscapeColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::linear_mapper::{LinearMapperError, make_linear_mapper};

const DEFAULT_WIDTH: u32 = 700;
const DEFAULT_HEIGHT: u32 = 700;
const DEFAULT_REAL: Interval = Interval::new(-2.25, 0.75);
const DEFAULT_IMAG: Interval = Interval::new(-1.5, 1.5);
const DEFAULT_STEP: f64 = 0.05;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    #[default]
    Sequential,
    Rayon,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    InvalidSize { width: u32, height: u32 },
    InvalidRegion { real: Interval, imag: Interval },
    InvalidStep { step: f64 },
    EmptyGrid { step: f64 },
    Mapper(LinearMapperError),
    Algorithm(MandelbrotError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "display size must be positive: {}x{}", width, height)
            }
            Self::InvalidRegion { real, imag } => {
                write!(f, "region bounds must be finite: real {}, imaginary {}", real, imag)
            }
            Self::InvalidStep { step } => {
                write!(f, "sampling step must be a positive number, got {}", step)
            }
            Self::EmptyGrid { step } => {
                write!(f, "sampling step {} leaves an axis without samples", step)
            }
            Self::Mapper(err) => write!(f, "{}", err),
            Self::Algorithm(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mapper(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LinearMapperError> for ConfigError {
    fn from(err: LinearMapperError) -> Self {
        Self::Mapper(err)
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

/// Everything one render depends on: display size, bounding box, sampling
/// step and iteration settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub real: Interval,
    pub imag: Interval,
    pub step: f64,
    pub max_iterations: u32,
    pub threshold: f64,
    pub sampling: SamplingStrategy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            real: DEFAULT_REAL,
            imag: DEFAULT_IMAG,
            step: DEFAULT_STEP,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threshold: DEFAULT_THRESHOLD,
            sampling: SamplingStrategy::default(),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_region(mut self, real: Interval, imag: Interval) -> Self {
        self.real = real;
        self.imag = imag;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingStrategy) -> Self {
        self.sampling = sampling;
        self
    }

    /// Checks the settings up front so a bad region or step fails instead of
    /// sampling nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        if !self.real.is_finite() || !self.imag.is_finite() {
            return Err(ConfigError::InvalidRegion {
                real: self.real,
                imag: self.imag,
            });
        }

        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep { step: self.step });
        }

        if self.step > self.real.width() || self.step > self.imag.width() {
            return Err(ConfigError::EmptyGrid { step: self.step });
        }

        self.algorithm()?;
        self.pixel_mapping()?;
        self.colour_map()?;

        Ok(())
    }

    pub fn algorithm(&self) -> Result<EscapeTimeAlgorithm, MandelbrotError> {
        EscapeTimeAlgorithm::new(self.max_iterations, self.threshold)
    }

    pub fn pixel_mapping(&self) -> Result<PixelMapping, LinearMapperError> {
        Ok(PixelMapping {
            real_to_x: make_linear_mapper(
                self.real,
                Interval::new(0.0, f64::from(self.width)),
                true,
            )?,
            imag_to_y: make_linear_mapper(
                self.imag,
                Interval::new(0.0, f64::from(self.height)),
                true,
            )?,
        })
    }

    pub fn colour_map(&self) -> Result<EscapeColourMap, LinearMapperError> {
        EscapeColourMap::new(self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();

        assert_eq!(config.width, 700);
        assert_eq!(config.height, 700);
        assert_eq!(config.real, Interval::new(-2.25, 0.75));
        assert_eq!(config.imag, Interval::new(-1.5, 1.5));
        assert_eq!(config.step, 0.05);
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.threshold, 2.0);
        assert_eq!(config.sampling, SamplingStrategy::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_adjusters() {
        let config = RenderConfig::default()
            .with_size(64, 48)
            .with_region(Interval::new(-1.0, 1.0), Interval::new(-0.5, 0.5))
            .with_step(0.1)
            .with_max_iterations(50)
            .with_threshold(4.0)
            .with_sampling(SamplingStrategy::Rayon);

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 48);
        assert_eq!(config.real, Interval::new(-1.0, 1.0));
        assert_eq!(config.imag, Interval::new(-0.5, 0.5));
        assert_eq!(config.step, 0.1);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.threshold, 4.0);
        assert_eq!(config.sampling, SamplingStrategy::Rayon);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = RenderConfig::default().with_size(0, 700);

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSize {
                width: 0,
                height: 700
            })
        );
    }

    #[test]
    fn test_infinite_region_bound_is_rejected() {
        let real = Interval::new(f64::NEG_INFINITY, 0.75);
        let imag = Interval::new(-1.5, 1.5);
        let config = RenderConfig::default().with_region(real, imag);

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRegion { real, imag })
        );
    }

    #[test]
    fn test_nan_region_is_rejected() {
        let config = RenderConfig::default().with_region(
            Interval::new(-2.25, 0.75),
            Interval::new(f64::NAN, f64::NAN),
        );

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_non_positive_step_is_rejected() {
        for step in [0.0, -0.05] {
            let config = RenderConfig::default().with_step(step);

            assert_eq!(config.validate(), Err(ConfigError::InvalidStep { step }));
        }
    }

    #[test]
    fn test_step_wider_than_region_is_rejected() {
        let config = RenderConfig::default().with_step(5.0);

        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid { step: 5.0 }));
    }

    #[test]
    fn test_degenerate_region_is_division_by_zero() {
        let config = RenderConfig::default()
            .with_region(Interval::new(0.5, 0.5), Interval::new(-1.5, 1.5));

        assert!(matches!(
            config.pixel_mapping(),
            Err(LinearMapperError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let config = RenderConfig::default().with_max_iterations(0);

        assert_eq!(
            config.validate(),
            Err(ConfigError::Algorithm(MandelbrotError::ZeroMaxIterationsError))
        );
    }

    #[test]
    fn test_default_mapping_keeps_default_grid_on_surface() {
        let config = RenderConfig::default();
        let mapping = config.pixel_mapping().unwrap();

        assert_eq!(mapping.real_to_x.apply(-2.25), 0.0);
        assert_eq!(mapping.imag_to_y.apply(-1.5), 0.0);
        assert!(mapping.real_to_x.apply(0.7) < 700.0);
        assert!(mapping.imag_to_y.apply(1.45) < 700.0);
    }
}

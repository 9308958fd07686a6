use std::error::Error;
use std::fmt;

use crate::core::actions::render_samples::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::interval::Interval;
use crate::core::util::linear_mapper::{LinearMapper, LinearMapperError, MapperOutput};

const CHANNEL_RANGE: Interval = Interval::new(0.0, 255.0);
const BLUE_BIAS: u8 = 100;

#[derive(Debug, PartialEq)]
pub enum MandelbrotColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for MandelbrotColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotColourMapError {}

/// Red/green ramp from black towards yellow over `[0, max_input]`, with a
/// constant blue channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearColourMap {
    max_input: u32,
    channel: LinearMapper,
}

impl LinearColourMap {
    pub fn new(max_input: u32) -> Result<Self, LinearMapperError> {
        let channel = LinearMapper::new(
            Interval::new(0.0, f64::from(max_input)),
            CHANNEL_RANGE,
            MapperOutput::Integer,
        )?;

        Ok(Self { max_input, channel })
    }
}

impl ColourMap for LinearColourMap {
    type T = u32;
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.max_input {
            return Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_input,
            });
        }

        let v = self.channel.apply(f64::from(iterations)) as u8;

        Ok(Colour {
            r: v,
            g: v,
            b: BLUE_BIAS,
        })
    }
}

pub fn make_color_mapper(max_input: u32) -> Result<LinearColourMap, LinearMapperError> {
    LinearColourMap::new(max_input)
}

/// Colours an escape result: members of the set are black, escaping points
/// take their colour from the iteration ramp.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeColourMap {
    ramp: LinearColourMap,
}

impl EscapeColourMap {
    pub fn new(max_iterations: u32) -> Result<Self, LinearMapperError> {
        Ok(Self {
            ramp: LinearColourMap::new(max_iterations)?,
        })
    }
}

impl ColourMap for EscapeColourMap {
    type T = EscapeResult;
    type Failure = MandelbrotColourMapError;

    fn map(&self, result: EscapeResult) -> Result<Colour, Self::Failure> {
        if result.bounded {
            return Ok(Colour::BLACK);
        }

        self.ramp.map(result.iterations_used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn escaped_after(iterations_used: u32) -> EscapeResult {
        EscapeResult {
            bounded: false,
            final_value: Complex::new(3.0, 0.0),
            iterations_used,
        }
    }

    #[test]
    fn test_midpoint_is_half_channel_with_blue_bias() {
        let colour = make_color_mapper(20).unwrap().map(10).unwrap();

        assert_eq!(colour, Colour::new(127, 127, 100));
    }

    #[test]
    fn test_ramp_endpoints() {
        let mapper = make_color_mapper(20).unwrap();

        assert_eq!(mapper.map(0).unwrap(), Colour::new(0, 0, 100));
        assert_eq!(mapper.map(20).unwrap(), Colour::new(255, 255, 100));
    }

    #[test]
    fn test_ramp_is_monotonic() {
        let mapper = make_color_mapper(20).unwrap();
        let reds: Vec<u8> = (0..=20).map(|i| mapper.map(i).unwrap().r).collect();

        assert!(reds.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_iterations_above_max_are_rejected() {
        let mapper = make_color_mapper(20).unwrap();

        assert_eq!(
            mapper.map(21),
            Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations: 21,
                max_iterations: 20
            })
        );
    }

    #[test]
    fn test_zero_max_input_is_degenerate() {
        assert!(matches!(
            make_color_mapper(0),
            Err(LinearMapperError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_bounded_results_are_black() {
        let colour_map = EscapeColourMap::new(20).unwrap();
        let result = EscapeResult {
            bounded: true,
            final_value: Complex::new(0.0, 0.0),
            iterations_used: 19,
        };

        assert_eq!(colour_map.map(result).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_escaped_results_use_ramp() {
        let colour_map = EscapeColourMap::new(20).unwrap();

        assert_eq!(colour_map.map(escaped_after(0)).unwrap(), Colour::new(0, 0, 100));
        assert_eq!(
            colour_map.map(escaped_after(10)).unwrap(),
            Colour::new(127, 127, 100)
        );
    }

    #[test]
    fn test_error_display() {
        let err = MandelbrotColourMapError::IterationsExceedMax {
            iterations: 30,
            max_iterations: 20,
        };

        assert_eq!(err.to_string(), "iterations 30 exceeds maximum 20");
    }
}

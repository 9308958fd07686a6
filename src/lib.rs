mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::mandelbrot::MandelbrotController;
pub use crate::core::actions::render_samples::ports::colour_map::ColourMap;
pub use crate::core::actions::render_samples::ports::renderer::Renderer;
pub use crate::core::actions::render_samples::render_samples::{
    PixelMapping, RenderSamplesError, RenderStats, render_samples,
};
pub use crate::core::actions::sample_grid::ports::point_evaluator::PointEvaluator;
pub use crate::core::actions::sample_grid::sample_grid::{GridError, axis_indices, axis_values, sample_grid};
pub use crate::core::actions::sample_grid::sample_grid_rayon::sample_grid_rayon;
pub use crate::core::data::colour::{Colour, ColourParseError};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::{EscapeResult, GridSample};
pub use crate::core::data::interval::Interval;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD, EscapeTimeAlgorithm, evaluate,
};
pub use crate::core::fractals::mandelbrot::colour_map::{
    EscapeColourMap, LinearColourMap, MandelbrotColourMapError, make_color_mapper,
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, RenderConfig, SamplingStrategy};
pub use crate::core::util::linear_mapper::{LinearMapper, LinearMapperError, MapperOutput, make_linear_mapper};
pub use presenters::pixels::pixel_format::{FrameSizeError, copy_pixel_buffer_to_rgba};

#[cfg(feature = "gui")]
pub use input::gui::run_gui;

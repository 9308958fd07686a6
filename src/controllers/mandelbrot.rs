use std::error::Error;
use std::time::Instant;

use crate::core::actions::render_samples::ports::renderer::Renderer;
use crate::core::actions::render_samples::render_samples::{RenderStats, render_samples};
use crate::core::actions::sample_grid::sample_grid::sample_grid;
use crate::core::actions::sample_grid::sample_grid_rayon::sample_grid_rayon;
use crate::core::data::escape_result::GridSample;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::mandelbrot_config::{RenderConfig, SamplingStrategy};

/// Runs one full render: sample the bounding box, then paint every sample.
#[derive(Debug, Clone, Default)]
pub struct MandelbrotController {
    config: RenderConfig,
}

impl MandelbrotController {
    pub fn new(config: RenderConfig) -> Result<Self, Box<dyn Error>> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn sample(&self) -> Result<Vec<GridSample>, Box<dyn Error>> {
        let config = &self.config;
        let algorithm = config.algorithm()?;

        log::info!("Sampling Mandelbrot set...");
        log::info!("Region: {} x {}i", config.real, config.imag);
        log::info!("Step: {}", config.step);
        log::info!("Max iterations: {}", config.max_iterations);
        log::info!("Sampling: {:?}", config.sampling);

        let start = Instant::now();
        let samples = match config.sampling {
            SamplingStrategy::Sequential => {
                sample_grid(config.real, config.imag, config.step, &algorithm)?
            }
            SamplingStrategy::Rayon => {
                sample_grid_rayon(config.real, config.imag, config.step, &algorithm)?
            }
        };

        log::info!("Samples: {}", samples.len());
        log::info!("Duration:   {:?}", start.elapsed());

        Ok(samples)
    }

    pub fn render<R>(&self, renderer: &mut R) -> Result<RenderStats, Box<dyn Error>>
    where
        R: Renderer,
        R::Failure: 'static,
    {
        let samples = self.sample()?;
        let mapping = self.config.pixel_mapping()?;
        let colour_map = self.config.colour_map()?;

        let stats = render_samples(&samples, mapping, &colour_map, renderer)?;

        log::info!(
            "Painted {} of {} samples ({} in set, {} off surface)",
            stats.painted,
            stats.samples,
            stats.bounded,
            stats.skipped
        );

        Ok(stats)
    }

    pub fn render_to_buffer(&self) -> Result<(PixelBuffer, RenderStats), Box<dyn Error>> {
        let mut buffer = PixelBuffer::new(self.config.width, self.config.height)?;
        log::info!("Image size: {}x{}", buffer.width(), buffer.height());

        let stats = self.render(&mut buffer)?;

        Ok((buffer, stats))
    }
}

use std::error::Error;
use std::fmt;

use crate::core::actions::render_samples::ports::colour_map::ColourMap;
use crate::core::actions::render_samples::ports::renderer::Renderer;
use crate::core::data::escape_result::{EscapeResult, GridSample};
use crate::core::data::point::Point;
use crate::core::util::linear_mapper::LinearMapper;

#[derive(Debug)]
pub enum RenderSamplesError {
    ColourMap(Box<dyn Error>),
    Renderer(Box<dyn Error>),
}

impl fmt::Display for RenderSamplesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Renderer(err) => write!(f, "renderer error: {}", err),
        }
    }
}

impl Error for RenderSamplesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) | Self::Renderer(err) => Some(err.as_ref()),
        }
    }
}

/// Plane-to-pixel mapping for both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelMapping {
    pub real_to_x: LinearMapper,
    pub imag_to_y: LinearMapper,
}

impl PixelMapping {
    #[must_use]
    pub fn to_pixel(&self, sample: &GridSample) -> Point {
        Point {
            x: self.real_to_x.apply(sample.point.real) as i32,
            y: self.imag_to_y.apply(sample.point.imag) as i32,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub samples: usize,
    pub bounded: usize,
    pub painted: usize,
    pub skipped: usize,
}

/// Paints every sample onto the renderer.
///
/// Samples whose pixel falls outside the renderer surface are skipped and
/// counted rather than handed to the renderer.
pub fn render_samples<CMap, R>(
    samples: &[GridSample],
    mapping: PixelMapping,
    colour_map: &CMap,
    renderer: &mut R,
) -> Result<RenderStats, RenderSamplesError>
where
    CMap: ColourMap<T = EscapeResult>,
    CMap::Failure: 'static,
    R: Renderer,
    R::Failure: 'static,
{
    let width = i64::from(renderer.width());
    let height = i64::from(renderer.height());
    let mut stats = RenderStats::default();

    for sample in samples {
        stats.samples += 1;

        if sample.result.bounded {
            stats.bounded += 1;
        }

        let pixel = mapping.to_pixel(sample);

        if !(0..width).contains(&i64::from(pixel.x)) || !(0..height).contains(&i64::from(pixel.y)) {
            log::trace!("skipping: {}, {} is off the surface", pixel.x, pixel.y);
            stats.skipped += 1;
            continue;
        }

        let colour = colour_map
            .map(sample.result)
            .map_err(|err| RenderSamplesError::ColourMap(Box::new(err)))?;

        log::trace!("plotting: {}, {} -> {}", pixel.x, pixel.y, colour);

        renderer
            .paint(pixel, colour)
            .map_err(|err| RenderSamplesError::Renderer(Box::new(err)))?;

        stats.painted += 1;
    }

    Ok(stats)
}

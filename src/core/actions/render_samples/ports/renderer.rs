use std::error::Error;

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Display surface the render loop paints into.
///
/// Callers only paint pixels inside `[0, width) x [0, height)`.
pub trait Renderer {
    type Failure: Error;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn paint(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure>;
}

use crate::core::actions::render_samples::ports::renderer::Renderer;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    InvalidSize { width: u32, height: u32 },
    PixelOutsideBounds { pixel: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel buffer size must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} surface",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// RGB canvas the render loop paints into. Starts out black.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let index = point.y as usize * self.width as usize + point.x as usize;
        Some(index * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            })?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        self.index_of(point).map(|index| Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

impl Renderer for PixelBuffer {
    type Failure = PixelBufferError;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn paint(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure> {
        self.set_pixel(pixel, colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_black_buffer() {
        let buffer = PixelBuffer::new(10, 10).unwrap();

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(
            PixelBuffer::new(0, 5),
            Err(PixelBufferError::InvalidSize { width: 0, height: 5 })
        );
        assert_eq!(
            PixelBuffer::new(5, 0),
            Err(PixelBufferError::InvalidSize { width: 5, height: 0 })
        );
    }

    #[test]
    fn test_set_pixel_writes_rgb_bytes() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();
        let result = buffer.set_pixel(Point { x: 1, y: 1 }, Colour::new(255, 0, 0));

        assert!(result.is_ok());
        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
    }

    #[test]
    fn test_set_pixel_corners() {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();

        buffer
            .set_pixel(Point { x: 0, y: 0 }, Colour::new(1, 2, 3))
            .unwrap();
        buffer
            .set_pixel(Point { x: 2, y: 1 }, Colour::new(4, 5, 6))
            .unwrap();

        assert_eq!(&buffer.buffer()[0..3], &[1, 2, 3]);
        assert_eq!(&buffer.buffer()[15..18], &[4, 5, 6]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        for pixel in [
            Point { x: 3, y: 0 },
            Point { x: 0, y: 3 },
            Point { x: -1, y: 1 },
            Point { x: 1, y: -1 },
        ] {
            assert_eq!(
                buffer.set_pixel(pixel, Colour::WHITE),
                Err(PixelBufferError::PixelOutsideBounds {
                    pixel,
                    width: 3,
                    height: 3
                })
            );
        }

        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_reads_back_painted_colour() {
        let mut buffer = PixelBuffer::new(4, 4).unwrap();
        let colour = Colour::new(127, 127, 100);

        buffer.paint(Point { x: 2, y: 3 }, colour).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 3 }), Some(colour));
        assert_eq!(buffer.pixel(Point { x: 3, y: 3 }), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 4, y: 3 }), None);
    }

    #[test]
    fn test_renderer_reports_surface_size() {
        let buffer = PixelBuffer::new(700, 500).unwrap();

        assert_eq!(Renderer::width(&buffer), 700);
        assert_eq!(Renderer::height(&buffer), 500);
    }
}

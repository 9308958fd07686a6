use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::pixels::pixel_format::copy_pixel_buffer_to_rgba;

/// Shows a finished [`PixelBuffer`] in a window.
///
/// The framebuffer keeps the render's resolution; `pixels` scales it to
/// whatever size the window surface has.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, buffer: &PixelBuffer) -> Result<Self, Box<dyn std::error::Error>> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(buffer.width(), buffer.height(), surface_texture)?;

        copy_pixel_buffer_to_rgba(buffer, pixels.frame_mut())?;

        Ok(Self { pixels })
    }

    pub fn render(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        // Skip invalid sizes (e.g., minimized window)
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

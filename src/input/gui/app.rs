//! Main GUI application loop.

use std::error::Error;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::mandelbrot::MandelbrotController;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderConfig;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Renders the set once, then shows it until the window is closed.
pub fn run_gui(config: RenderConfig) -> Result<(), Box<dyn Error>> {
    let controller = MandelbrotController::new(config)?;
    let (buffer, _) = controller.render_to_buffer()?;

    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot")
            .with_inner_size(LogicalSize::new(
                f64::from(config.width),
                f64::from(config.height),
            ))
            .build(&event_loop)?,
    ));

    let mut presenter = PixelsPresenter::new(window, &buffer)?;
    window.request_redraw();

    event_loop.run(|event, elwt| {
        if let Event::WindowEvent { event, window_id } = event {
            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Err(e) = presenter.render() {
                        log::error!("Render error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(e) = presenter.resize(size.width, size.height) {
                        log::error!("Resize error: {e}");
                        elwt.exit();
                    }
                    window.request_redraw();
                }
                _ => {}
            }
        }
    })?;

    Ok(())
}

//! GUI input adapter: a winit window showing the rendered set through a
//! pixels framebuffer.

mod app;

pub use app::run_gui;

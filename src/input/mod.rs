//! Input adapters for the renderer.

#[cfg(feature = "gui")]
pub mod gui;

pub mod ports;
#[allow(clippy::module_inception)]
pub mod render_samples;

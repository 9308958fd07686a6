pub mod render_samples;
pub mod sample_grid;

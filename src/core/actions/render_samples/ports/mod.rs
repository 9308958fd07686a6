pub mod colour_map;
pub mod renderer;

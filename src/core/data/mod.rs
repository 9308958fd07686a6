pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod interval;
pub mod pixel_buffer;
pub mod point;

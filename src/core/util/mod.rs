pub mod linear_mapper;

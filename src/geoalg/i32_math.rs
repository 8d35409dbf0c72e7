pub mod dimensions;
pub mod matrix;

pub mod grid;
pub mod model;
pub mod pixel;

mod error;
mod transformer;

pub use error::{Axis, CoordinateConfigError};
pub use transformer::MapImageTransformer;

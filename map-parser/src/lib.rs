pub mod assembler;
pub mod container;
pub mod decompress;
pub mod error;
pub mod parsers;
pub mod path;
pub mod segment;
pub mod zones;

pub use error::{DecodeError, Result};

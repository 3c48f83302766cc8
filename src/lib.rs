pub mod charset;
pub mod error;
pub mod generator;
pub mod keystream;

pub use error::{Error, Result};
pub use generator::{Generator, MIN_LENGTH};
pub use keystream::Keystream;

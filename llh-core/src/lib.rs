pub mod coordinate;
pub mod error;

pub use coordinate::{llh_to_ecef, EcefCoord, LlhCoord};
pub use error::{LlhError, Result};

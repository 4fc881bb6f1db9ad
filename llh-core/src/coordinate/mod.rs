//! Geodetic coordinate transformations

pub mod ellipsoid;
mod transforms;

pub use ellipsoid::{calc_denom, curvature_terms, DEG_TO_RAD, E_E, R_E_KM};
pub use transforms::{llh_to_ecef, EcefCoord, LlhCoord};

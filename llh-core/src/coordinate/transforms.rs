use nalgebra::Vector3;

use super::ellipsoid::{curvature_terms, DEG_TO_RAD};
use crate::error::{LlhError, Result};

/// ECEF coordinates (Earth-Centered, Earth-Fixed), km
pub type EcefCoord = Vector3<f64>;

/// LLH coordinates (Latitude, Longitude, Height above ellipsoid)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LlhCoord {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub hae_km: f64,
}

impl LlhCoord {
    pub fn new(lat_deg: f64, lon_deg: f64, hae_km: f64) -> Self {
        Self { lat_deg, lon_deg, hae_km }
    }

    /// Parse a position from its three textual components.
    ///
    /// Ranges are not checked; any literal `f64` accepts is passed through.
    pub fn parse(lat_deg: &str, lon_deg: &str, hae_km: &str) -> Result<Self> {
        Ok(Self {
            lat_deg: parse_component("lat_deg", lat_deg)?,
            lon_deg: parse_component("lon_deg", lon_deg)?,
            hae_km: parse_component("hae_km", hae_km)?,
        })
    }

    pub fn to_ecef(&self) -> EcefCoord {
        llh_to_ecef(self)
    }
}

fn parse_component(field: &'static str, value: &str) -> Result<f64> {
    value.trim().parse().map_err(|source| LlhError::Parse {
        field,
        value: value.to_string(),
        source,
    })
}

/// Convert LLH to ECEF
pub fn llh_to_ecef(llh: &LlhCoord) -> EcefCoord {
    let lat_rad = llh.lat_deg * DEG_TO_RAD;
    let lon_rad = llh.lon_deg * DEG_TO_RAD;

    let (c_e, s_e) = curvature_terms(lat_rad);

    let x = (c_e + llh.hae_km) * lat_rad.cos() * lon_rad.cos();
    let y = (c_e + llh.hae_km) * lat_rad.cos() * lon_rad.sin();
    let z = (s_e + llh.hae_km) * lat_rad.sin();

    Vector3::new(x, y, z)
}

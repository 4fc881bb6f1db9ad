//! Reference ellipsoid constants and curvature terms

use std::f64::consts::PI;

use tracing::trace;

/// Equatorial radius of the reference ellipsoid (km)
pub const R_E_KM: f64 = 6378.1363;

/// Eccentricity of the reference ellipsoid
pub const E_E: f64 = 0.081819221456;

pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Shared denominator of the curvature terms: `sqrt(1 - ecc² sin²(lat))`.
///
/// Strictly positive for any `|ecc| < 1`.
pub fn calc_denom(ecc: f64, lat_rad: f64) -> f64 {
    (1.0 - ecc.powi(2) * lat_rad.sin().powi(2)).sqrt()
}

/// Curvature terms `(C_E, S_E)` in km at a geodetic latitude.
///
/// `C_E` is the transverse (prime vertical) radius of curvature, `S_E` the
/// meridional term `C_E (1 - e²)`. Both share one denominator.
pub fn curvature_terms(lat_rad: f64) -> (f64, f64) {
    let denom = calc_denom(E_E, lat_rad);
    let c_e = R_E_KM / denom;
    let s_e = R_E_KM * (1.0 - E_E.powi(2)) / denom;
    trace!(denom, c_e, s_e, "curvature terms");
    (c_e, s_e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_denom_at_equator() {
        assert_eq!(calc_denom(E_E, 0.0), 1.0);
    }

    #[test]
    fn test_denom_at_pole() {
        let expected = (1.0 - E_E * E_E).sqrt();
        assert!((calc_denom(E_E, 90.0 * DEG_TO_RAD) - expected).abs() < 1e-15);
        assert!((calc_denom(E_E, -90.0 * DEG_TO_RAD) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_denom_sphere() {
        // zero eccentricity is a sphere, denominator is 1 everywhere
        for lat_deg in [-90.0, -45.0, 0.0, 30.0, 89.9] {
            assert!((calc_denom(0.0, lat_deg * DEG_TO_RAD) - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_curvature_at_equator() {
        let (c_e, s_e) = curvature_terms(0.0);
        assert_eq!(c_e, R_E_KM);
        assert!((s_e - R_E_KM * (1.0 - E_E * E_E)).abs() < 1e-9);
    }

    #[test]
    fn test_curvature_terms_share_denominator() {
        let lat = 38.8977 * DEG_TO_RAD;
        let denom = calc_denom(E_E, lat);
        let (c_e, s_e) = curvature_terms(lat);
        assert_eq!(c_e, R_E_KM / denom);
        assert_eq!(s_e, R_E_KM * (1.0 - E_E.powi(2)) / denom);
    }

    #[test]
    fn test_curvature_at_pole() {
        // meridional term reduces to the polar radius
        let lat = 90.0 * DEG_TO_RAD;
        let polar_radius = R_E_KM * (1.0 - E_E * E_E).sqrt();
        let (c_e, s_e) = curvature_terms(lat);
        assert!((s_e - polar_radius).abs() < 1e-9);
        assert!((c_e - R_E_KM / (1.0 - E_E * E_E).sqrt()).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_denom_positive_and_bounded(lat_rad in -10.0f64..10.0) {
            let d = calc_denom(E_E, lat_rad);
            prop_assert!(d > 0.0);
            prop_assert!(d <= 1.0);
        }

        #[test]
        fn prop_meridional_below_transverse(lat_deg in -90.0f64..=90.0) {
            let lat = lat_deg * DEG_TO_RAD;
            let (c_e, s_e) = curvature_terms(lat);
            let ratio = s_e / c_e;
            prop_assert!((ratio - (1.0 - E_E * E_E)).abs() < 1e-12);
        }
    }
}

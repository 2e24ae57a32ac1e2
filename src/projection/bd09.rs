use std::f64::consts::PI;

use crate::projection::gcj02::wgs84_to_gcj02;

/// Angular scale of the BD-09 radius and angle perturbations
pub const X_PI: f64 = (PI * 3000.0) / 180.0;

/// Constant longitude offset added after the polar perturbation
pub const LNG_OFFSET: f64 = 0.0065;

/// Constant latitude offset added after the polar perturbation
pub const LAT_OFFSET: f64 = 0.006;

/// Converts a GCJ-02 coordinate to BD-09
///
/// Unlike [`wgs84_to_gcj02`] this is applied everywhere, including outside
/// China.
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
    let bd_lng = z * theta.cos() + LNG_OFFSET;
    let bd_lat = z * theta.sin() + LAT_OFFSET;
    (bd_lng, bd_lat)
}

/// Converts a WGS-84 coordinate to BD-09 by way of GCJ-02
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let (gcj_lng, gcj_lat) = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(gcj_lng, gcj_lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_origin() {
        assert_eq!(gcj02_to_bd09(0.0, 0.0), (0.0065, 0.006));
    }

    #[test]
    fn test_gcj_to_bd_beijing() {
        assert_close(
            gcj02_to_bd09(116.40367162595768, 39.91063350638631),
            (116.41004410170474, 39.916972856075134),
        );
    }

    #[test]
    fn test_applied_outside_china() {
        let (lng, lat) = gcj02_to_bd09(-122.4194, 37.7749);
        assert_close((lng, lat), (-122.41294123162515, 37.78070076713803));
        assert_ne!((lng, lat), (-122.4194, 37.7749));
    }

    #[test]
    fn test_wgs_to_bd() {
        assert_close(
            wgs84_to_bd09(116.397428, 39.90923),
            (116.41004410170474, 39.916972856075134),
        );
        assert_close(
            wgs84_to_bd09(121.4737, 31.2304),
            (121.484781468503, 31.234310593689997),
        );
    }

    #[test]
    fn test_wgs_to_bd_is_composition() {
        for (lng, lat) in [
            (116.397428, 39.90923),
            (113.2644, 23.1291),
            (-122.4194, 37.7749),
            (72.004, 30.0),
            (0.0, 0.0),
        ] {
            let (g_lng, g_lat) = wgs84_to_gcj02(lng, lat);
            let composed = gcj02_to_bd09(g_lng, g_lat);
            let direct = wgs84_to_bd09(lng, lat);
            assert_eq!(direct.0.to_bits(), composed.0.to_bits());
            assert_eq!(direct.1.to_bits(), composed.1.to_bits());
        }
    }

    #[test]
    fn test_nan_propagates() {
        let (lng, lat) = gcj02_to_bd09(f64::NAN, 30.0);
        assert!(lng.is_nan());
        assert!(lat.is_nan());
    }
}

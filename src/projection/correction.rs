//! Empirical offset polynomials of the GCJ-02 obfuscation.
//!
//! Both functions take offsets from 105°E / 35°N. The literals and the order
//! in which terms are summed must not change: map tiles expect the exact
//! floating-point output of this evaluation order.

use std::f64::consts::PI;

/// Raw latitude correction for an offset `(d_lng, d_lat)` from 105°E / 35°N
///
/// The result is in ellipsoid-scaled meters, not degrees. See
/// [`wgs84_to_gcj02`](crate::projection::gcj02::wgs84_to_gcj02) for the scaling.
pub fn transform_lat(d_lng: f64, d_lat: f64) -> f64 {
    let mut ret = -100.0
        + 2.0 * d_lng
        + 3.0 * d_lat
        + 0.2 * d_lat * d_lat
        + 0.1 * d_lng * d_lat
        + 0.2 * d_lng.abs().sqrt();
    ret += ((20.0 * (6.0 * d_lng * PI).sin() + 20.0 * (2.0 * d_lng * PI).sin()) * 2.0) / 3.0;
    ret += ((20.0 * (d_lat * PI).sin() + 40.0 * ((d_lat / 3.0) * PI).sin()) * 2.0) / 3.0;
    ret += ((160.0 * ((d_lat / 12.0) * PI).sin() + 320.0 * ((d_lat * PI) / 30.0).sin()) * 2.0)
        / 3.0;
    ret
}

/// Raw longitude correction for an offset `(d_lng, d_lat)` from 105°E / 35°N
pub fn transform_lng(d_lng: f64, d_lat: f64) -> f64 {
    let mut ret = 300.0
        + d_lng
        + 2.0 * d_lat
        + 0.1 * d_lng * d_lng
        + 0.1 * d_lng * d_lat
        + 0.1 * d_lng.abs().sqrt();
    ret += ((20.0 * (6.0 * d_lng * PI).sin() + 20.0 * (2.0 * d_lng * PI).sin()) * 2.0) / 3.0;
    ret += ((20.0 * (d_lng * PI).sin() + 40.0 * ((d_lng / 3.0) * PI).sin()) * 2.0) / 3.0;
    ret += ((150.0 * ((d_lng / 12.0) * PI).sin() + 300.0 * ((d_lng / 30.0) * PI).sin()) * 2.0)
        / 3.0;
    ret
}

use std::f64::consts::PI;

use crate::projection::correction::{transform_lat, transform_lng};
use crate::projection::region::out_of_china;

/// Semi-major axis of the Krasovsky 1940 ellipsoid, in meters
pub const A: f64 = 6378245.0;

/// Squared first eccentricity of the Krasovsky 1940 ellipsoid
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.00669342162296594323;

/// Longitude of the correction polynomials' expansion point
pub const ORIGIN_LNG: f64 = 105.0;

/// Latitude of the correction polynomials' expansion point
pub const ORIGIN_LAT: f64 = 35.0;

/// Converts a WGS-84 coordinate to GCJ-02
///
/// Coordinates outside the GCJ-02 region are returned unchanged. At the poles
/// `cos(lat)` is zero and the longitude becomes infinite, but the poles are
/// outside the region so this only matters for callers bypassing the gate.
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }

    let mut d_lat = transform_lat(lng - ORIGIN_LNG, lat - ORIGIN_LAT);
    let mut d_lng = transform_lng(lng - ORIGIN_LNG, lat - ORIGIN_LAT);

    let rad_lat = (lat / 180.0) * PI;
    let sin_lat = rad_lat.sin();
    let magic = 1.0 - EE * sin_lat * sin_lat;
    let sqrt_magic = magic.sqrt();

    d_lat = (d_lat * 180.0) / (((A * (1.0 - EE)) / (magic * sqrt_magic)) * PI);
    d_lng = (d_lng * 180.0) / ((A / sqrt_magic) * rad_lat.cos() * PI);

    (lng + d_lng, lat + d_lat)
}

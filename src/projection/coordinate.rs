use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::projection::{bd09, gcj02, region};

/// A longitude/latitude pair in decimal degrees
///
/// The datum is not stored: a coordinate is WGS-84, GCJ-02 or BD-09 depending
/// on which transform produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Creates a new coordinate from longitude and latitude
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Returns true if the coordinate falls outside the GCJ-02 region
    pub fn is_out_of_china(&self) -> bool {
        region::out_of_china(self.lng, self.lat)
    }

    /// Returns true if both components are finite
    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// Rejects NaN and infinite components
    ///
    /// The transforms accept any input; call this first if the source of the
    /// coordinate is untrusted.
    pub fn validate(self) -> Result<Self> {
        if !self.lng.is_finite() {
            return Err(Error::NonFinite(format!("lng = {}", self.lng)));
        }
        if !self.lat.is_finite() {
            return Err(Error::NonFinite(format!("lat = {}", self.lat)));
        }
        Ok(self)
    }

    /// Converts a WGS-84 coordinate to GCJ-02
    pub fn wgs84_to_gcj02(self) -> Self {
        gcj02::wgs84_to_gcj02(self.lng, self.lat).into()
    }

    /// Converts a GCJ-02 coordinate to BD-09
    pub fn gcj02_to_bd09(self) -> Self {
        bd09::gcj02_to_bd09(self.lng, self.lat).into()
    }

    /// Converts a WGS-84 coordinate to BD-09
    pub fn wgs84_to_bd09(self) -> Self {
        bd09::wgs84_to_bd09(self.lng, self.lat).into()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lng, coord.lat)
    }
}

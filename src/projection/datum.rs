use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::projection::bd09::{gcj02_to_bd09, wgs84_to_bd09};
use crate::projection::coordinate::Coordinate;
use crate::projection::gcj02::wgs84_to_gcj02;

/// Geodetic datums used by Chinese map providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Datum {
    /// Global satellite datum
    Wgs84,
    /// "Mars" datum used by most Chinese map providers
    Gcj02,
    /// Baidu datum, layered on top of GCJ-02
    Bd09,
}

impl Datum {
    /// Returns the canonical name of the datum
    pub fn name(&self) -> &'static str {
        match self {
            Datum::Wgs84 => "WGS84",
            Datum::Gcj02 => "GCJ02",
            Datum::Bd09 => "BD09",
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" => Ok(Datum::Wgs84),
            "gcj02" | "gcj-02" => Ok(Datum::Gcj02),
            "bd09" | "bd-09" => Ok(Datum::Bd09),
            _ => Err(Error::UnknownDatum(s.to_string())),
        }
    }
}

/// Transforms coordinates from one datum to another
///
/// Only forward transforms exist (WGS-84 to GCJ-02 to BD-09). Identity
/// transforms are allowed and return their input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatumTransform {
    from_datum: Datum,
    to_datum: Datum,
}

impl DatumTransform {
    /// Creates a new datum transformation between two datums
    pub fn new(from_datum: Datum, to_datum: Datum) -> Result<Self> {
        if !Self::is_supported(from_datum, to_datum) {
            warn!(from = %from_datum, to = %to_datum, "inverse datum transform requested");
            return Err(Error::UnsupportedTransform {
                from: from_datum,
                to: to_datum,
            });
        }

        debug!(from = %from_datum, to = %to_datum, "created datum transform");
        Ok(Self {
            from_datum,
            to_datum,
        })
    }

    /// Returns true if a transform from `from_datum` to `to_datum` exists
    pub fn is_supported(from_datum: Datum, to_datum: Datum) -> bool {
        matches!(
            (from_datum, to_datum),
            (Datum::Wgs84, Datum::Wgs84)
                | (Datum::Gcj02, Datum::Gcj02)
                | (Datum::Bd09, Datum::Bd09)
                | (Datum::Wgs84, Datum::Gcj02)
                | (Datum::Gcj02, Datum::Bd09)
                | (Datum::Wgs84, Datum::Bd09)
        )
    }

    /// Transforms a single coordinate
    pub fn transform(&self, coord: Coordinate) -> Coordinate {
        let (lng, lat) = (coord.lng, coord.lat);
        match (self.from_datum, self.to_datum) {
            (Datum::Wgs84, Datum::Gcj02) => wgs84_to_gcj02(lng, lat).into(),
            (Datum::Gcj02, Datum::Bd09) => gcj02_to_bd09(lng, lat).into(),
            (Datum::Wgs84, Datum::Bd09) => wgs84_to_bd09(lng, lat).into(),
            // only identity pairs remain after `new`
            _ => coord,
        }
    }

    /// Transforms multiple coordinates
    pub fn transform_many(&self, coords: &[Coordinate]) -> Vec<Coordinate> {
        trace!(
            count = coords.len(),
            from = %self.from_datum,
            to = %self.to_datum,
            "transforming batch"
        );
        coords.iter().map(|&coord| self.transform(coord)).collect()
    }

    /// Returns the source datum
    pub fn from_datum(&self) -> Datum {
        self.from_datum
    }

    /// Returns the target datum
    pub fn to_datum(&self) -> Datum {
        self.to_datum
    }
}

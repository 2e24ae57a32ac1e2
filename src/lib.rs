//! marscoord - WGS-84, GCJ-02 and BD-09 coordinate conversion
//!
//! Maps of mainland China are published in GCJ-02, an obfuscated datum
//! derived from WGS-84, and Baidu maps add a further BD-09 offset on top.
//! marscoord converts WGS-84 positions into both.
//!
//! # Examples
//!
//! ## Free functions
//!
//! ```
//! use marscoord::{wgs84_to_gcj02, wgs84_to_bd09};
//!
//! // Outside China nothing changes
//! assert_eq!(wgs84_to_gcj02(-122.4194, 37.7749), (-122.4194, 37.7749));
//!
//! let (lng, lat) = wgs84_to_gcj02(116.397428, 39.90923);
//! assert!((lng - 116.403671).abs() < 1e-6);
//! assert!((lat - 39.910633).abs() < 1e-6);
//!
//! let (bd_lng, bd_lat) = wgs84_to_bd09(116.397428, 39.90923);
//! assert!(bd_lng > lng && bd_lat > lat);
//! ```
//!
//! ## Datum transforms
//!
//! ```
//! use marscoord::{Coordinate, Datum, DatumTransform};
//!
//! let transform = DatumTransform::new(Datum::Wgs84, Datum::Bd09)?;
//! let bd = transform.transform(Coordinate::new(121.4737, 31.2304));
//! println!("BD-09: {}, {}", bd.lng, bd.lat);
//!
//! // Inverse transforms are not provided
//! assert!(DatumTransform::new(Datum::Gcj02, Datum::Wgs84).is_err());
//! # Ok::<(), marscoord::Error>(())
//! ```

pub mod error;
pub mod projection;

pub use error::{Error, Result};
pub use projection::{
    gcj02_to_bd09, out_of_china, transform_lat, transform_lng, wgs84_to_bd09, wgs84_to_gcj02,
    Coordinate, Datum, DatumTransform,
};

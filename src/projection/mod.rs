//! Coordinate transforms between WGS-84, GCJ-02 and BD-09

pub mod bd09;
pub mod coordinate;
pub mod correction;
pub mod datum;
pub mod gcj02;
pub mod region;

pub use bd09::{gcj02_to_bd09, wgs84_to_bd09};
pub use coordinate::Coordinate;
pub use correction::{transform_lat, transform_lng};
pub use datum::{Datum, DatumTransform};
pub use gcj02::wgs84_to_gcj02;
pub use region::out_of_china;

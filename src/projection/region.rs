//! Coarse bounding box of the territory where GCJ-02 applies.

/// Western edge of the GCJ-02 region
pub const MIN_LNG: f64 = 72.004;
/// Eastern edge of the GCJ-02 region
pub const MAX_LNG: f64 = 137.8347;
/// Southern edge of the GCJ-02 region
pub const MIN_LAT: f64 = 0.8293;
/// Northern edge of the GCJ-02 region
pub const MAX_LAT: f64 = 55.8271;

/// Returns true if the coordinate lies outside the GCJ-02 region
///
/// Points exactly on an edge count as inside. This is a rectangle, not a
/// border, so parts of neighbouring countries are treated as inside.
pub fn out_of_china(lng: f64, lat: f64) -> bool {
    lng < MIN_LNG || lng > MAX_LNG || lat < MIN_LAT || lat > MAX_LAT
}

//! Haversine great-circle distance.
//!
//! # Algorithm
//!
//! For two points given in radians:
//!
//! ```text
//! a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
//! d = 2R·asin(√a)
//! ```
//!
//! with R the mean Earth radius. Accurate to ~0.5% against the true geodesic
//! (the Earth is not a perfect sphere), which is ample for tour costing.

use crate::models::Location;

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two locations in kilometers.
///
/// Symmetric and non-negative; zero exactly when both coordinate pairs
/// coincide.
///
/// # Examples
///
/// ```
/// use hamiltour::models::Location;
/// use hamiltour::distance::haversine_km;
///
/// let a = Location::new(0, "a", 0.0, 0.0).unwrap();
/// let b = Location::new(1, "b", 0.0, 1.0).unwrap();
/// // One degree of longitude on the equator is ~111.2 km.
/// assert!((haversine_km(&a, &b) - 111.195).abs() < 0.01);
/// ```
pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    let dlat = b.lat_radians() - a.lat_radians();
    let dlon = b.lon_radians() - a.lon_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat_radians().cos() * b.lat_radians().cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

//! Geographic event location.

/// A geographic event: an identifier, a display name, and a coordinate
/// pair in degrees.
///
/// Locations are immutable once constructed. The id is the location's
/// index in the loaded universe, not a user-facing key.
///
/// # Examples
///
/// ```
/// use hamiltour::models::Location;
///
/// let loc = Location::new(0, "Boston", 42.3601, -71.0589).unwrap();
/// assert_eq!(loc.id(), 0);
/// assert!((loc.lat_radians() - 42.3601_f64.to_radians()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: usize,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location from coordinates in degrees.
    ///
    /// Returns `None` if either coordinate is non-finite or out of range
    /// (latitude beyond ±90°, longitude beyond ±180°).
    pub fn new(id: usize, name: impl Into<String>, latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if latitude.abs() > 90.0 || longitude.abs() > 180.0 {
            return None;
        }
        Some(Self {
            id,
            name: name.into(),
            latitude,
            longitude,
        })
    }

    /// Index of this location in the universe it was loaded into.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name of the event.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in radians.
    pub fn lat_radians(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_radians(&self) -> f64 {
        self.longitude.to_radians()
    }
}

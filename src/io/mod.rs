//! CSV location loading.
//!
//! The universe is a tabular file with `name,latitude,longitude` columns
//! (header row required). Ids are assigned by row order, matching the
//! indices the sampler draws against.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Location;

#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

/// Reads a location universe from any CSV reader.
///
/// Fails on malformed rows and on out-of-range coordinates; a partial
/// universe is never returned.
///
/// # Examples
///
/// ```
/// use hamiltour::io::read_locations;
///
/// let csv = "name,latitude,longitude\n\
///            Boston,42.3601,-71.0589\n\
///            Cambridge,42.3736,-71.1097\n";
/// let universe = read_locations(csv.as_bytes()).unwrap();
/// assert_eq!(universe.len(), 2);
/// assert_eq!(universe[1].name(), "Cambridge");
/// assert_eq!(universe[1].id(), 1);
/// ```
pub fn read_locations<R: Read>(reader: R) -> Result<Vec<Location>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut universe = Vec::new();
    for (row, record) in csv_reader.deserialize().enumerate() {
        let record: LocationRecord = record?;
        let location = Location::new(row, record.name, record.latitude, record.longitude)
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "row {row}: coordinates ({}, {}) out of range",
                    record.latitude, record.longitude
                ))
            })?;
        universe.push(location);
    }
    Ok(universe)
}

/// Reads a location universe from a CSV file on disk.
pub fn load_locations_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Location>> {
    read_locations(File::open(path)?)
}

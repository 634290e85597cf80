use crate::error::PvgisError;
use std::ops::RangeInclusive;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A validated geographical coordinate in decimal degrees.
///
/// South and west are negative. A `LatLon` can only be obtained through
/// [`LatLon::new`], so every value in circulation lies within
/// `[-90, 90]` x `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use pvgis::LatLon;
///
/// let kassel = LatLon::new(51.0, 9.0).unwrap();
/// assert_eq!(kassel.lat(), 51.0);
/// assert_eq!(kassel.lon(), 9.0);
///
/// assert!(LatLon::new(91.0, 9.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    lat: f64,
    lon: f64,
}

impl LatLon {
    /// Validates and creates a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`PvgisError::InvalidCoordinate`] if either value falls outside its
    /// closed range, NaN included.
    pub fn new(lat: f64, lon: f64) -> Result<Self, PvgisError> {
        if LATITUDE_RANGE.contains(&lat) && LONGITUDE_RANGE.contains(&lon) {
            Ok(Self { lat, lon })
        } else {
            Err(PvgisError::InvalidCoordinate { lat, lon })
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

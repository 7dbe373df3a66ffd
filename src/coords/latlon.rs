use std::fmt::Display;

use crate::{coords::svy21::Svy21, utility::split_pair, Error, ParseCoord, SVY21};

/// Representation of a WGS84 Latitude/Longitude point, in decimal degrees.
/// Can be converted to/from [`Svy21`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Creates a point without checking the bounds of lat/lon. The projection
    /// functions accept any finite value.
    ///
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::new(1.366666, 103.833333);
    /// assert_eq!(coord.latitude(), 1.366666);
    /// ```
    pub fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::create(1.2949192688485278, 103.77367436885834);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 1.2949192688485278);
    /// assert_eq!(coord.longitude(), 103.77367436885834);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Converts from [`Svy21`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::{LatLon, Svy21};
    ///
    /// // Corner of Sembawang 66kV Substation
    /// let coord_svy21 = Svy21::new(48187.789, 27720.130);
    ///
    /// let converted = LatLon::from_svy21(&coord_svy21);
    ///
    /// assert!((converted.latitude() - 1.4520670518379692).abs() < 1e-10);
    /// assert!((converted.longitude() - 103.83080332777138).abs() < 1e-10);
    /// ```
    pub fn from_svy21(value: &Svy21) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Svy21`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::LatLon;
    ///
    /// // Corner of Ang Mo Kio 66kV Substation
    /// let coord = LatLon::new(1.3699278977737488, 103.85695034976466);
    ///
    /// let converted = coord.to_svy21();
    ///
    /// // Reference values are given to the millimeter
    /// assert!((converted.northing() - 39105.269).abs() < 1e-3);
    /// assert!((converted.easting() - 30629.967).abs() < 1e-3);
    /// ```
    pub fn to_svy21(&self) -> Svy21 {
        SVY21.to_projected(self.latitude, self.longitude)
    }
}

impl ParseCoord for LatLon {
    /// Parses `"lat lon"` or `"lat,lon"`. Does not range-check the values.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (lat, lon) = split_pair(value)?;
        Ok(LatLon::new(lat, lon))
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(f, "{lat} {lon}")
    }
}

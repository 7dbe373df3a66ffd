use std::fmt::Display;

use crate::{coords::latlon::LatLon, utility::split_pair, Error, ParseCoord, SVY21};

/// Representation of an SVY21 point: northing and easting in meters,
/// measured from the projection's false origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Svy21 {
    #[cfg_attr(feature = "serde", serde(alias = "n", alias = "y"))]
    pub(crate) northing: f64,
    #[cfg_attr(feature = "serde", serde(alias = "e", alias = "x"))]
    pub(crate) easting: f64,
}

impl Svy21 {
    /// Creates an SVY21 point. No range check is done since SVY21 has no
    /// defined extent beyond the series' accuracy near Singapore.
    ///
    /// ```
    /// use svy21::Svy21;
    ///
    /// let coord = Svy21::new(38744.572, 28001.642);
    ///
    /// assert_eq!(coord.northing(), 38744.572);
    /// assert_eq!(coord.easting(), 28001.642);
    /// ```
    pub fn new(northing: f64, easting: f64) -> Svy21 {
        Self { northing, easting }
    }

    /// Returns the northing in meters.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns the easting in meters.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Converts from [`LatLon`] to [`Svy21`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::{LatLon, Svy21};
    ///
    /// // Corner of Jurong Lake Canal 400kV Cable Bridge
    /// let coord = LatLon::new(1.3446255443241177, 103.72794378041792);
    ///
    /// let converted = Svy21::from_latlon(&coord);
    ///
    /// assert!((converted.northing() - 36307.704).abs() < 1e-3);
    /// assert!((converted.easting() - 16272.970).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon) -> Svy21 {
        value.to_svy21()
    }

    /// Converts from [`Svy21`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::Svy21;
    ///
    /// // The false origin maps back onto the projection origin
    /// let coord = Svy21::new(38744.572, 28001.642).to_latlon();
    ///
    /// assert!((coord.latitude() - 1.366666).abs() < 1e-10);
    /// assert!((coord.longitude() - 103.833333).abs() < 1e-10);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        SVY21.to_geodetic(self.northing, self.easting)
    }
}

impl ParseCoord for Svy21 {
    /// Parses `"northing easting"` or `"northing,easting"`.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (northing, easting) = split_pair(value)?;
        Ok(Svy21::new(northing, easting))
    }
}

impl Display for Svy21 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        write!(f, "{northing} {easting}")
    }
}

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion between WGS84 latitude/longitude and the Singapore SVY21
//! projected coordinate system.
//!
//! ```
//! use svy21::{LatLon, Svy21};
//!
//! let coord = LatLon::new(1.2949192688485278, 103.77367436885834);
//! let projected: Svy21 = coord.to_svy21();
//!
//! assert!((projected.northing() - 30811.264).abs() < 1e-3);
//! assert!((projected.easting() - 21362.157).abs() < 1e-3);
//!
//! let back = projected.to_latlon();
//! assert!((back.latitude() - coord.latitude()).abs() < 1e-7);
//! assert!((back.longitude() - coord.longitude()).abs() < 1e-7);
//! ```

use lazy_static::lazy_static;
use log::debug;
use thiserror::Error;

pub mod batch;
pub mod coords;
pub mod testcase;
pub mod utility;

pub use coords::{latlon::LatLon, svy21::Svy21};
pub use projections::transverse_mercator::ProjectionConstants;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

lazy_static! {
    /// Process-wide SVY21 constants, built on first use.
    pub static ref SVY21: ProjectionConstants = {
        let constants = ProjectionConstants::svy21();
        debug!("Initialized SVY21 projection constants: {constants:?}");
        constants
    };
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Test case on line {line} is invalid: {msg}")]
    InvalidTestCase {
        line: usize,
        msg: String,
    },
    #[error("CSV row {row} is invalid: {msg}")]
    InvalidRecord {
        row: usize,
        msg: String,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub trait ParseCoord {
    /// Parses a coordinate from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if the string is not two numbers.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Returns [`Error::InvalidCoord`] if the string is not two numbers.
///
/// # Usage
///
/// ```
/// use svy21::{from_str, LatLon, Svy21};
///
/// let coord: LatLon = from_str("1.366666, 103.833333").unwrap();
/// assert_eq!(coord.longitude(), 103.833333);
///
/// let coord: Svy21 = from_str("38744.572 28001.642").unwrap();
/// assert_eq!(coord.easting(), 28001.642);
///
/// assert!(from_str::<_, Svy21>("38744.572").is_err());
/// assert!(from_str::<_, Svy21>("north east").is_err());
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Builds the fixed SVY21 constant set.
pub fn make_constants() -> ProjectionConstants {
    ProjectionConstants::svy21()
}

/// Projects latitude/longitude (degrees) to SVY21 northing/easting (meters).
///
/// ```
/// use svy21::{make_constants, to_projected};
///
/// let constants = make_constants();
/// let coord = to_projected(1.366666, 103.833333, &constants);
///
/// assert!((coord.northing() - 38744.572).abs() < 1e-3);
/// assert!((coord.easting() - 28001.642).abs() < 1e-3);
/// ```
pub fn to_projected(lat: f64, lon: f64, constants: &ProjectionConstants) -> Svy21 {
    constants.to_projected(lat, lon)
}

/// Converts SVY21 northing/easting (meters) to latitude/longitude (degrees).
///
/// ```
/// use svy21::{to_geodetic, SVY21};
///
/// // Corner of Jurong Lake Canal 400kV Cable Bridge
/// let coord = to_geodetic(36307.704, 16272.970, &SVY21);
///
/// assert!((coord.latitude() - 1.3446255443241177).abs() < 1e-10);
/// assert!((coord.longitude() - 103.72794378041792).abs() < 1e-10);
/// ```
pub fn to_geodetic(northing: f64, easting: f64, constants: &ProjectionConstants) -> LatLon {
    constants.to_geodetic(northing, easting)
}

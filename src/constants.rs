// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

// SVY21 fundamental point is Base 7 at Pierce Reservoir,
// 1°22'02.9154"N 103°49'31.9752"E. Using those exact values puts results
// slightly off the published test data, so the rounded origin below is used.

// Origin latitude in degrees
pub(crate) const SVY21_ORIGIN_LAT: f64 = 1.366_666;
// Origin longitude in degrees
pub(crate) const SVY21_ORIGIN_LON: f64 = 103.833_333;
// False northing in meters
pub(crate) const SVY21_FALSE_NORTHING: f64 = 38_744.572;
// False easting in meters
pub(crate) const SVY21_FALSE_EASTING: f64 = 28_001.642;
// Central scale factor
pub(crate) const SVY21_K: f64 = 1.;

use std::f64::consts::PI;

use crate::{
    coords::{latlon::LatLon, svy21::Svy21},
    constants::{
        SVY21_FALSE_EASTING, SVY21_FALSE_NORTHING, SVY21_K, SVY21_ORIGIN_LAT, SVY21_ORIGIN_LON,
        WGS84_A, WGS84_F,
    },
};

const RAD_RATIO: f64 = PI / 180.;

/// Ellipsoid and projection constants for the SVY21 Transverse Mercator
/// projection, following the LINZ preliminary computations
/// (<https://www.linz.govt.nz/data/geodetic-system/coordinate-conversion/projection-conversions/transverse-mercator-preliminary-computations>).
///
/// All derived values are a pure function of the fixed datum literals, so two
/// instances always compare equal. Build one with [`ProjectionConstants::svy21`]
/// or use the cached [`crate::SVY21`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConstants {
    a: f64,
    f: f64,
    b: f64,
    origin_lat: f64,
    origin_lon: f64,
    false_northing: f64,
    false_easting: f64,
    k: f64,
    e2: f64,
    e4: f64,
    e6: f64,
    a0: f64,
    a2: f64,
    a4: f64,
    a6: f64,
}

impl ProjectionConstants {
    /// Builds the SVY21 constant set on the WGS84 ellipsoid.
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::ProjectionConstants;
    ///
    /// let constants = ProjectionConstants::svy21();
    ///
    /// assert_eq!(constants.a(), 6_378_137.);
    /// assert!((constants.b() - 6_356_752.314_245).abs() < 1e-3);
    /// assert_eq!(constants.origin_latitude(), 1.366666);
    /// assert_eq!(constants.origin_longitude(), 103.833333);
    /// ```
    pub fn svy21() -> ProjectionConstants {
        Self::with_datum(
            WGS84_A,
            WGS84_F,
            SVY21_ORIGIN_LAT,
            SVY21_ORIGIN_LON,
            SVY21_FALSE_NORTHING,
            SVY21_FALSE_EASTING,
            SVY21_K,
        )
    }

    fn with_datum(
        a: f64,
        f: f64,
        origin_lat: f64,
        origin_lon: f64,
        false_northing: f64,
        false_easting: f64,
        k: f64,
    ) -> ProjectionConstants {
        let b = a * (1. - f);
        let e2 = (2. * f) - (f * f);
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        // Meridian arc series coefficients
        let a0 = 1. - (e2 / 4.) - (3. * e4 / 64.) - (5. * e6 / 256.);
        let a2 = (3. / 8.) * (e2 + (e4 / 4.) + (15. * e6 / 128.));
        let a4 = (15. / 256.) * (e4 + (3. * e6 / 4.));
        let a6 = 35. * e6 / 3072.;

        Self {
            a,
            f,
            b,
            origin_lat,
            origin_lon,
            false_northing,
            false_easting,
            k,
            e2,
            e4,
            e6,
            a0,
            a2,
            a4,
            a6,
        }
    }

    /// Semi-major axis in meters.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Flattening.
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Semi-minor axis in meters.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Latitude of the projection origin, in degrees.
    #[inline]
    pub fn origin_latitude(&self) -> f64 {
        self.origin_lat
    }

    /// Longitude of the projection origin (central meridian), in degrees.
    #[inline]
    pub fn origin_longitude(&self) -> f64 {
        self.origin_lon
    }

    /// False northing in meters, added to every northing.
    #[inline]
    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    /// False easting in meters, added to every easting.
    #[inline]
    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    /// Scale factor on the central meridian.
    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.k
    }

    /// Eccentricity squared.
    #[inline]
    pub fn e2(&self) -> f64 {
        self.e2
    }

    /// Eccentricity to the fourth power.
    #[inline]
    pub fn e4(&self) -> f64 {
        self.e4
    }

    /// Eccentricity to the sixth power.
    #[inline]
    pub fn e6(&self) -> f64 {
        self.e6
    }

    /// Meridian arc coefficient of the linear latitude term.
    #[inline]
    pub fn a0(&self) -> f64 {
        self.a0
    }

    /// Meridian arc coefficient of `sin(2φ)`.
    #[inline]
    pub fn a2(&self) -> f64 {
        self.a2
    }

    /// Meridian arc coefficient of `sin(4φ)`.
    #[inline]
    pub fn a4(&self) -> f64 {
        self.a4
    }

    /// Meridian arc coefficient of `sin(6φ)`.
    #[inline]
    pub fn a6(&self) -> f64 {
        self.a6
    }

    /// Meridian arc distance in meters from the equator to `lat` (degrees).
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::ProjectionConstants;
    ///
    /// let constants = ProjectionConstants::svy21();
    ///
    /// assert_eq!(constants.meridian_arc(0.), 0.);
    /// // One degree of latitude near the equator is roughly 110.6km
    /// assert!((constants.meridian_arc(1.) - 110_574.).abs() < 1.);
    /// ```
    pub fn meridian_arc(&self, lat: f64) -> f64 {
        let lat_r = lat * RAD_RATIO;
        self.a
            * ((self.a0 * lat_r) - (self.a2 * (2. * lat_r).sin()) + (self.a4 * (4. * lat_r).sin())
                - (self.a6 * (6. * lat_r).sin()))
    }

    /// Radius of curvature in the meridian.
    fn rho(&self, sin2_lat: f64) -> f64 {
        let num = self.a * (1. - self.e2);
        let denom = (1. - self.e2 * sin2_lat).powf(1.5);
        num / denom
    }

    /// Radius of curvature in the prime vertical.
    fn v(&self, sin2_lat: f64) -> f64 {
        let poly = 1. - self.e2 * sin2_lat;
        self.a / poly.sqrt()
    }

    /// Forward projection of a WGS84 latitude/longitude (degrees) to SVY21.
    ///
    /// Never fails; accuracy degrades with distance from the origin.
    #[allow(clippy::similar_names)]
    pub fn to_projected(&self, lat: f64, lon: f64) -> Svy21 {
        let lat_r = lat * RAD_RATIO;
        let sin_lat = lat_r.sin();
        let sin2_lat = sin_lat * sin_lat;
        let cos_lat = lat_r.cos();
        let cos2_lat = cos_lat * cos_lat;
        let cos3_lat = cos2_lat * cos_lat;
        let cos4_lat = cos3_lat * cos_lat;
        let cos5_lat = cos4_lat * cos_lat;
        let cos6_lat = cos5_lat * cos_lat;
        let cos7_lat = cos6_lat * cos_lat;

        let rho = self.rho(sin2_lat);
        let v = self.v(sin2_lat);
        let psi = v / rho;
        let t = lat_r.tan();
        let w = (lon - self.origin_lon) * RAD_RATIO;

        let m = self.meridian_arc(lat);
        let mo = self.meridian_arc(self.origin_lat);

        let w2 = w * w;
        let w4 = w2 * w2;
        let w6 = w4 * w2;
        let w8 = w6 * w2;

        let psi2 = psi * psi;
        let psi3 = psi2 * psi;
        let psi4 = psi3 * psi;

        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        // Northing
        let n_term1 = w2 / 2. * v * sin_lat * cos_lat;
        let n_term2 = w4 / 24. * v * sin_lat * cos3_lat * (4. * psi2 + psi - t2);
        let n_term3 = w6 / 720.
            * v
            * sin_lat
            * cos5_lat
            * ((8. * psi4) * (11. - 24. * t2) - (28. * psi3) * (1. - 6. * t2)
                + psi2 * (1. - 32. * t2)
                - psi * 2. * t2
                + t4);
        let n_term4 =
            w8 / 40320. * v * sin_lat * cos7_lat * (1385. - 3111. * t2 + 543. * t4 - t6);
        let northing =
            self.false_northing + self.k * (m - mo + n_term1 + n_term2 + n_term3 + n_term4);

        // Easting
        let e_term1 = w2 / 6. * cos2_lat * (psi - t2);
        let e_term2 = w4 / 120.
            * cos4_lat
            * ((4. * psi3) * (1. - 6. * t2) + psi2 * (1. + 8. * t2) - psi * 2. * t2 + t4);
        let e_term3 = w6 / 5040. * cos6_lat * (61. - 479. * t2 + 179. * t4 - t6);
        let easting =
            self.false_easting + self.k * v * w * cos_lat * (1. + e_term1 + e_term2 + e_term3);

        Svy21::new(northing, easting)
    }

    /// Inverse projection of an SVY21 northing/easting (meters) to WGS84.
    ///
    /// The footpoint latitude is found with a closed-form series rather than
    /// iteration. At latitudes of exactly ±90° the secant term is undefined and
    /// the result is non-finite.
    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn to_geodetic(&self, northing: f64, easting: f64) -> LatLon {
        let n_prime = northing - self.false_northing;
        let mo = self.meridian_arc(self.origin_lat);
        let m_prime = mo + (n_prime / self.k);

        // Third flattening
        let n = (self.a - self.b) / (self.a + self.b);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;
        let g = self.a
            * (1. - n)
            * (1. - n2)
            * (1. + (9. * n2 / 4.) + (225. * n4 / 64.))
            * RAD_RATIO;
        let sigma = (m_prime * PI) / (180. * g);

        // Footpoint latitude
        let lat_prime_t1 = ((3. * n / 2.) - (27. * n3 / 32.)) * (2. * sigma).sin();
        let lat_prime_t2 = ((21. * n2 / 16.) - (55. * n4 / 32.)) * (4. * sigma).sin();
        let lat_prime_t3 = (151. * n3 / 96.) * (6. * sigma).sin();
        let lat_prime_t4 = (1097. * n4 / 512.) * (8. * sigma).sin();
        let lat_prime = sigma + lat_prime_t1 + lat_prime_t2 + lat_prime_t3 + lat_prime_t4;

        let sin_lat_prime = lat_prime.sin();
        let sin2_lat_prime = sin_lat_prime * sin_lat_prime;

        let rho_prime = self.rho(sin2_lat_prime);
        let v_prime = self.v(sin2_lat_prime);
        let psi_prime = v_prime / rho_prime;
        let psi_prime2 = psi_prime * psi_prime;
        let psi_prime3 = psi_prime2 * psi_prime;
        let psi_prime4 = psi_prime3 * psi_prime;
        let t_prime = lat_prime.tan();
        let t_prime2 = t_prime * t_prime;
        let t_prime4 = t_prime2 * t_prime2;
        let t_prime6 = t_prime4 * t_prime2;

        let e_prime = easting - self.false_easting;
        let x = e_prime / (self.k * v_prime);
        let x2 = x * x;
        let x3 = x2 * x;
        let x5 = x3 * x2;
        let x7 = x5 * x2;

        // Latitude
        let lat_factor = t_prime / (self.k * rho_prime);
        let lat_term1 = lat_factor * ((e_prime * x) / 2.);
        let lat_term2 = lat_factor
            * ((e_prime * x3) / 24.)
            * ((-4. * psi_prime2) + (9. * psi_prime) * (1. - t_prime2) + (12. * t_prime2));
        let lat_term3 = lat_factor
            * ((e_prime * x5) / 720.)
            * ((8. * psi_prime4) * (11. - 24. * t_prime2)
                - (12. * psi_prime3) * (21. - 71. * t_prime2)
                + (15. * psi_prime2) * (15. - 98. * t_prime2 + 15. * t_prime4)
                + (180. * psi_prime) * (5. * t_prime2 - 3. * t_prime4)
                + 360. * t_prime4);
        let lat_term4 = lat_factor
            * ((e_prime * x7) / 40320.)
            * (1385. - 3633. * t_prime2 + 4095. * t_prime4 + 1575. * t_prime6);
        let lat = lat_prime - lat_term1 + lat_term2 - lat_term3 + lat_term4;

        // Longitude. The secant is taken at the corrected latitude, not the footpoint.
        let sec_lat = 1. / lat.cos();
        let lon_term1 = x * sec_lat;
        let lon_term2 = ((x3 * sec_lat) / 6.) * (psi_prime + 2. * t_prime2);
        let lon_term3 = ((x5 * sec_lat) / 120.)
            * ((-4. * psi_prime3) * (1. - 6. * t_prime2)
                + psi_prime2 * (9. - 68. * t_prime2)
                + 72. * psi_prime * t_prime2
                + 24. * t_prime4);
        let lon_term4 = ((x7 * sec_lat) / 5040.)
            * (61. + 662. * t_prime2 + 1320. * t_prime4 + 720. * t_prime6);
        let lon = (self.origin_lon * RAD_RATIO) + lon_term1 - lon_term2 + lon_term3 - lon_term4;

        LatLon::new(lat / RAD_RATIO, lon / RAD_RATIO)
    }
}

impl Default for ProjectionConstants {
    fn default() -> Self {
        Self::svy21()
    }
}

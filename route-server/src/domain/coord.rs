//! Geographic coordinate type.

use std::fmt;

use geo::{HaversineDistance, HaversineIntermediate, Point};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// Error returned when a coordinate pair is out of range or not finite.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate [{lon}, {lat}]: {reason}")]
pub struct InvalidCoord {
    lon: f64,
    lat: f64,
    reason: &'static str,
}

/// A validated `[lon, lat]` pair in degrees.
///
/// Any `Coord` value satisfies `-180 <= lon <= 180` and `-90 <= lat <= 90`.
/// Serialized as a two-element array, longitude first (GeoJSON order).
///
/// # Examples
///
/// ```
/// use route_server::domain::Coord;
///
/// let shanghai = Coord::new(121.47, 31.23).unwrap();
/// assert_eq!(shanghai.lon(), 121.47);
///
/// assert!(Coord::new(181.0, 0.0).is_err());
/// assert!(Coord::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coord {
    lon: f64,
    lat: f64,
}

impl Coord {
    /// Null Island, `[0, 0]`.
    pub const ORIGIN: Coord = Coord { lon: 0.0, lat: 0.0 };

    /// Validate and build a coordinate.
    pub fn new(lon: f64, lat: f64) -> Result<Self, InvalidCoord> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(InvalidCoord {
                lon,
                lat,
                reason: "must be finite",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoord {
                lon,
                lat,
                reason: "longitude out of range",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoord {
                lon,
                lat,
                reason: "latitude out of range",
            });
        }
        Ok(Self { lon, lat })
    }

    /// Build a coordinate from a `[lon, lat]` slice, as found in GeoJSON.
    pub fn from_slice(pair: &[f64]) -> Option<Self> {
        match pair {
            [lon, lat, ..] => Self::new(*lon, *lat).ok(),
            _ => None,
        }
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    /// Great-circle distance in kilometres (haversine, mean earth radius).
    pub fn distance_km(&self, other: &Coord) -> f64 {
        self.point().haversine_distance(&other.point()) / 1000.0
    }

    /// Point at `fraction` (0..=1) of the way along the great circle to `other`.
    pub fn intermediate(&self, other: &Coord, fraction: f64) -> Coord {
        if fraction <= 0.0 {
            return *self;
        }
        if fraction >= 1.0 {
            return *other;
        }
        let p = self.point().haversine_intermediate(&other.point(), fraction);
        // Interpolation of valid inputs stays on the sphere; fall back to the
        // start point if the float math ever drifts out of range.
        Coord::new(wrap_lon(p.x()), p.y()).unwrap_or(*self)
    }
}

/// Normalize a longitude into [-180, 180].
fn wrap_lon(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.5}, {:.5}]", self.lon, self.lat)
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.lon)?;
        tup.serialize_element(&self.lat)?;
        tup.end()
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (lon, lat) = <(f64, f64)>::deserialize(deserializer)?;
        Coord::new(lon, lat).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lon: f64, lat: f64) -> Coord {
        Coord::new(lon, lat).unwrap()
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coord::new(-180.1, 0.0).is_err());
        assert!(Coord::new(0.0, 90.5).is_err());
        assert!(Coord::new(f64::INFINITY, 0.0).is_err());
        assert!(Coord::new(180.0, -90.0).is_ok());
    }

    #[test]
    fn from_slice_requires_two_values() {
        assert_eq!(Coord::from_slice(&[1.0, 2.0]), Some(c(1.0, 2.0)));
        assert_eq!(Coord::from_slice(&[1.0, 2.0, 30.0]), Some(c(1.0, 2.0)));
        assert_eq!(Coord::from_slice(&[1.0]), None);
        assert_eq!(Coord::from_slice(&[200.0, 2.0]), None);
    }

    #[test]
    fn london_to_paris_distance() {
        let london = c(-0.1278, 51.5074);
        let paris = c(2.3522, 48.8566);
        let d = london.distance_km(&paris);
        assert!((d - 343.5).abs() < 5.0, "got {d}");
    }

    #[test]
    fn intermediate_endpoints_are_exact() {
        let a = c(10.0, 10.0);
        let b = c(20.0, 20.0);
        assert_eq!(a.intermediate(&b, 0.0), a);
        assert_eq!(a.intermediate(&b, 1.0), b);
        let mid = a.intermediate(&b, 0.5);
        assert!((a.distance_km(&mid) - mid.distance_km(&b)).abs() < 1.0);
    }

    #[test]
    fn serializes_as_lon_lat_array() {
        let json = serde_json::to_string(&c(121.5, 31.25)).unwrap();
        assert_eq!(json, "[121.5,31.25]");

        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c(121.5, 31.25));

        assert!(serde_json::from_str::<Coord>("[500.0,1.0]").is_err());
    }
}

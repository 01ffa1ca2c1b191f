use crate::models::Coordinates;
use geo::{GeodesicDistance as _, Point};
use thiserror::Error;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

const METERS_PER_MILE: f64 = 1609.344;
const KM_PER_MILE: f64 = 1.609344;

/// Errors that can occur when measuring a distance
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("Invalid coordinate: lat {latitude}, lon {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Distance service unavailable: {0}")]
    Unavailable(String),
}

/// Distance capability injected into the scorer
///
/// Implementations must be deterministic and side-effect free. A provider that
/// cannot measure should return `f64::INFINITY` or an error; the scorer treats
/// both as "not nearby".
pub trait DistanceProvider: Send + Sync {
    /// Surface distance between two points in miles
    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError>;
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for Box<T> {
    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError> {
        (**self).distance_miles(from, to)
    }
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for std::sync::Arc<T> {
    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError> {
        (**self).distance_miles(from, to)
    }
}

/// Geodesic distance on the WGS84 ellipsoid
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicDistance;

impl DistanceProvider for GeodesicDistance {
    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError> {
        let from = to_point(from)?;
        let to = to_point(to)?;
        Ok(from.geodesic_distance(&to) / METERS_PER_MILE)
    }
}

/// Great-circle distance on a spherical Earth
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineDistance;

impl DistanceProvider for HaversineDistance {
    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError> {
        validate(from)?;
        validate(to)?;
        let km = haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude);
        Ok(km / KM_PER_MILE)
    }
}

/// Stand-in when no distance service is configured; nothing is ever nearby
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDistance;

impl DistanceProvider for UnavailableDistance {
    fn distance_miles(&self, _from: Coordinates, _to: Coordinates) -> Result<f64, DistanceError> {
        Ok(f64::INFINITY)
    }
}

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

fn validate(point: Coordinates) -> Result<(), DistanceError> {
    let Coordinates { latitude, longitude } = point;
    if latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
    {
        Ok(())
    } else {
        Err(DistanceError::InvalidCoordinate { latitude, longitude })
    }
}

fn to_point(point: Coordinates) -> Result<Point<f64>, DistanceError> {
    validate(point)?;
    Ok(Point::new(point.longitude, point.latitude))
}

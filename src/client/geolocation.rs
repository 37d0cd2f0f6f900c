use async_trait::async_trait;
use serde::Serialize;

use super::GeolocationError;
use crate::geo::Point;

/// Where the user is. Both `None` means the platform could not or would not say.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Point> for Coordinates {
    fn from(point: Point) -> Self {
        Coordinates {
            latitude: Some(point.latitude),
            longitude: Some(point.longitude),
        }
    }
}

/// Platform location capability. `current_position` may wait on a permission prompt
/// and is not bounded by a timeout here.
#[async_trait]
pub trait Geolocation: Send + Sync {
    fn is_available(&self) -> bool;

    async fn current_position(&self) -> Result<Point, GeolocationError>;
}

/// A host with no location capability at all.
pub struct Unsupported;

#[async_trait]
impl Geolocation for Unsupported {
    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<Point, GeolocationError> {
        Err(GeolocationError::PositionUnavailable)
    }
}

/// A host configured with a known position, e.g. a kiosk.
pub struct FixedPosition(pub Point);

#[async_trait]
impl Geolocation for FixedPosition {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Point, GeolocationError> {
        Ok(self.0)
    }
}

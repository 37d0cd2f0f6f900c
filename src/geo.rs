const EARTH_RADIUS_MILES: f64 = 3958.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Point {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in miles (haversine).
    pub fn miles_to(&self, other: &Point) -> f64 {
        let lat_a = self.latitude.to_radians();
        let lat_b = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_MILES * a.sqrt().asin()
    }
}

use crate::haversine::CoordinatePair;

fn square(x: f64) -> f64 {
    x * x
}

/// Great-circle distance between (x0, y0) and (x1, y1), given as
/// (longitude, latitude) in degrees, on a sphere of the given radius.
#[must_use]
pub fn reference(x0: f64, y0: f64, x1: f64, y1: f64, radius: f64) -> f64 {
    let lat1 = y0;
    let lat2 = y1;
    let lon1 = x0;
    let lon2 = x1;

    let lat_deg = (lat2 - lat1).to_radians();
    let lon_deg = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = square(f64::sin(lat_deg / 2.0))
        + f64::cos(lat1) * f64::cos(lat2) * square(f64::sin(lon_deg / 2.0));
    let c = 2.0 * f64::asin(f64::sqrt(a));

    radius * c
}

#[must_use]
pub fn naive(point: &CoordinatePair, earth_radius: f64) -> f64 {
    reference(point.x0, point.y0, point.x1, point.y1, earth_radius)
}

use uom::si::f64::Length;
use uom::si::length::kilometer;

/// mean earth radius in kilometers (IUGG)
pub const APPROX_EARTH_RADIUS_KM: f64 = 6371.0088;

/// straight-line (chord) length through the sphere that subtends the given
/// great-circle distance. strictly increasing for distances up to half the
/// earth's circumference, beyond which it saturates at the diameter.
pub fn chord_length_km(great_circle: Length) -> f64 {
    let d = great_circle.get::<kilometer>();
    let half_angle = (d / (2.0 * APPROX_EARTH_RADIUS_KM)).min(std::f64::consts::FRAC_PI_2);
    2.0 * APPROX_EARTH_RADIUS_KM * half_angle.sin()
}

/// inverse of [`chord_length_km`]: the great-circle distance subtended by a
/// chord of the given length in kilometers.
pub fn great_circle_from_chord_km(chord_km: f64) -> Length {
    let half = (chord_km / (2.0 * APPROX_EARTH_RADIUS_KM)).clamp(0.0, 1.0);
    Length::new::<kilometer>(2.0 * APPROX_EARTH_RADIUS_KM * half.asin())
}

/// projects a WGS84 coordinate onto a sphere of [`APPROX_EARTH_RADIUS_KM`]
/// as earth-centered cartesian coordinates, in kilometers.
pub fn to_cartesian_km(lon: f64, lat: f64) -> [f64; 3] {
    let (lon_r, lat_r) = (lon.to_radians(), lat.to_radians());
    [
        APPROX_EARTH_RADIUS_KM * lat_r.cos() * lon_r.cos(),
        APPROX_EARTH_RADIUS_KM * lat_r.cos() * lon_r.sin(),
        APPROX_EARTH_RADIUS_KM * lat_r.sin(),
    ]
}

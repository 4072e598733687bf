pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Polar to cartesian around `center`, angle in radians, y axis pointing down.
pub(crate) fn polar(center: kurbo::Point, radius: f64, angle: f64) -> kurbo::Point {
    kurbo::Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

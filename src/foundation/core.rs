use crate::foundation::error::{StarrowError, StarrowResult};
use crate::foundation::math::{lerp, mul_div255_u8};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Size, Vec2};

/// Pixel dimensions of a render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> StarrowResult<Self> {
        if width == 0 || height == 0 {
            return Err(StarrowError::validation("canvas must be at least 1x1"));
        }
        Ok(Self { width, height })
    }

    /// Smallest canvas that holds `size` (rounded up).
    pub fn covering(size: Size) -> StarrowResult<Self> {
        if !size.width.is_finite() || !size.height.is_finite() {
            return Err(StarrowError::validation("canvas size must be finite"));
        }
        Self::new(size.width.ceil().max(1.0) as u32, size.height.ceil().max(1.0) as u32)
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serialized as `"#rrggbbaa"`; deserializes from `"#rrggbb"`, `"#rrggbbaa"` or `[r, g, b, a]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ColorRepr", into = "ColorRepr")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // Default system palette.
    pub const RED: Self = Self::rgb(255, 59, 48);
    pub const BLUE: Self = Self::rgb(0, 122, 255);
    pub const PURPLE: Self = Self::rgb(175, 82, 222);
    pub const YELLOW: Self = Self::rgb(255, 204, 0);
    pub const TEAL: Self = Self::rgb(90, 200, 250);
    pub const ORANGE: Self = Self::rgb(255, 149, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    pub fn parse_hex(s: &str) -> StarrowResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(StarrowError::config(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| -> StarrowResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| StarrowError::config(format!("color '{s}' has invalid hex digits")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Channel-wise interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 { lerp(f64::from(a), f64::from(b), t).round() as u8 };
        Self {
            r: ch(self.r, to.r),
            g: ch(self.g, to.g),
            b: ch(self.b, to.b),
            a: ch(self.a, to.a),
        }
    }

    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            mul_div255_u8(u16::from(self.r), a),
            mul_div255_u8(u16::from(self.g), a),
            mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels([u8; 4]),
}

impl TryFrom<ColorRepr> for Rgba8 {
    type Error = StarrowError;

    fn try_from(value: ColorRepr) -> Result<Self, Self::Error> {
        match value {
            ColorRepr::Hex(s) => Self::parse_hex(&s),
            ColorRepr::Channels([r, g, b, a]) => Ok(Self::rgba(r, g, b, a)),
        }
    }
}

impl From<Rgba8> for ColorRepr {
    fn from(value: Rgba8) -> Self {
        Self::Hex(value.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

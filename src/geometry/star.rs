use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{BezPath, Circle, Point, Rect, Rgba8, Size};
use crate::foundation::error::{StarrowError, StarrowResult};
use crate::foundation::math::polar;

/// Compensates mask antialiasing: half the outline width, added to the clip radius and inset
/// from the partial fill so the stroke is never clipped away.
pub const DIAMETER_INCREMENT: f64 = 1.0;

/// Stroke width of every star outline.
pub const OUTLINE_WIDTH: f64 = 2.0 * DIAMETER_INCREMENT;

/// Immutable description of a single star: corner count, outline color and circumradius.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawStarSpec", into = "RawStarSpec")]
pub struct StarSpec {
    corners: u32,
    outline_color: Rgba8,
    radius: f64,
}

impl StarSpec {
    pub fn new(corners: u32, outline_color: Rgba8, radius: f64) -> StarrowResult<Self> {
        if corners < 3 {
            return Err(StarrowError::validation(format!(
                "star needs at least 3 corners, got {corners}"
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(StarrowError::validation(format!(
                "star radius must be finite and > 0, got {radius}"
            )));
        }
        Ok(Self {
            corners,
            outline_color,
            radius,
        })
    }

    pub fn corners(&self) -> u32 {
        self.corners
    }

    pub fn outline_color(&self) -> Rgba8 {
        self.outline_color
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Size of the square box a star occupies in the row.
    pub fn box_size(&self) -> Size {
        Size::new(2.0 * self.radius, 2.0 * self.radius)
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct RawStarSpec {
    corners: u32,
    outline_color: Rgba8,
    radius: f64,
}

impl TryFrom<RawStarSpec> for StarSpec {
    type Error = StarrowError;

    fn try_from(raw: RawStarSpec) -> Result<Self, Self::Error> {
        Self::new(raw.corners, raw.outline_color, raw.radius)
    }
}

impl From<StarSpec> for RawStarSpec {
    fn from(spec: StarSpec) -> Self {
        Self {
            corners: spec.corners,
            outline_color: spec.outline_color,
            radius: spec.radius,
        }
    }
}

/// Outline path and clip disc of one star, placed at a center point.
///
/// Vertices alternate between tips on the circumcircle and valleys at half the radius, starting
/// with the tip pointing straight up and walking clockwise (screen coordinates, y down).
#[derive(Clone, Debug, PartialEq)]
pub struct StarGeometry {
    center: Point,
    radius: f64,
    vertices: Vec<Point>,
}

impl StarGeometry {
    /// # Panics
    ///
    /// Panics when `corners < 3` or `radius <= 0`. [`StarSpec::new`] rejects both, so
    /// [`StarGeometry::from_spec`] never hits this.
    pub fn build(center: Point, radius: f64, corners: u32) -> Self {
        assert!(corners >= 3, "star needs at least 3 corners");
        assert!(radius > 0.0 && radius.is_finite(), "star radius must be > 0");

        let step = TAU / f64::from(corners);
        let start = -FRAC_PI_2;
        let mut vertices = Vec::with_capacity(2 * corners as usize);
        vertices.push(polar(center, radius, start));
        for i in 0..corners {
            let base = start + f64::from(i) * step;
            vertices.push(polar(center, radius / 2.0, base + step / 2.0));
            // The last tip coincides with the first one; the path closes onto it instead.
            if i + 1 < corners {
                vertices.push(polar(center, radius, base + step));
            }
        }

        Self {
            center,
            radius,
            vertices,
        }
    }

    pub fn from_spec(spec: &StarSpec, center: Point) -> Self {
        Self::build(center, spec.radius(), spec.corners())
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Tips at even indices, valleys at odd indices.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn tips(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().step_by(2).copied()
    }

    pub fn valleys(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().skip(1).step_by(2).copied()
    }

    /// Closed outline path.
    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.vertices.iter();
        if let Some(&first) = it.next() {
            path.move_to(first);
            for &p in it {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }

    /// Disc every fill of this star is clipped to. Grown by [`DIAMETER_INCREMENT`] so the
    /// outline stroke survives the clip.
    pub fn clip(&self) -> Circle {
        Circle::new(self.center, self.radius + DIAMETER_INCREMENT)
    }

    /// The star's `2R x 2R` layout box.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Size::new(2.0 * self.radius, 2.0 * self.radius))
    }

    /// Rectangle covering `fraction` of the star from its left edge, inset by the outline.
    pub fn partial_fill_rect(&self, fraction: f64) -> Rect {
        let b = self.bounds();
        let x0 = b.x0 + DIAMETER_INCREMENT;
        let width = fraction.clamp(0.0, 1.0) * (2.0 * (self.radius - DIAMETER_INCREMENT));
        Rect::new(x0, b.y0, x0 + width.max(0.0), b.y1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/star.rs"]
mod tests;

use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
use crate::geometry::star::OUTLINE_WIDTH;
use crate::render::scene::{FrameSnapshot, StarVisual};

const CLIP_TOLERANCE: f64 = 0.1;

/// Backend-agnostic draw list for one frame.
///
/// Clip pushes and pops are balanced; every op between a push and its pop is clipped to the
/// pushed path.
#[derive(Clone, Debug)]
pub struct RenderPlan {
    pub canvas: Canvas,
    pub background: Rgba8,
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillPath {
        path: BezPath,
        transform: Affine,
        color: Rgba8,
    },
    FillRect {
        rect: Rect,
        transform: Affine,
        color: Rgba8,
    },
    /// Stroke with round joins.
    StrokePath {
        path: BezPath,
        transform: Affine,
        color: Rgba8,
        width: f64,
    },
    PushClip {
        path: BezPath,
        transform: Affine,
    },
    PopClip,
}

fn scale_about(center: Point, scale: f64) -> Affine {
    if scale == 1.0 {
        return Affine::IDENTITY;
    }
    let c = center.to_vec2();
    Affine::translate(c) * Affine::scale(scale) * Affine::translate(-c)
}

impl RenderPlan {
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            ops: Vec::new(),
        }
    }

    /// Appends the stars of `snapshot`, shifted by `offset`.
    pub fn push_snapshot(&mut self, snapshot: &FrameSnapshot, offset: Vec2) {
        for star in &snapshot.stars {
            self.push_star(star, Affine::translate(offset));
        }
    }

    fn push_star(&mut self, star: &StarVisual, base: Affine) {
        let center = star.geometry.center();
        let transform = base * scale_about(center, star.scale);
        let outline = star.geometry.path();

        self.ops.push(DrawOp::PushClip {
            path: star.geometry.clip().to_path(CLIP_TOLERANCE),
            transform,
        });
        if !star.fill.is_transparent() {
            self.ops.push(DrawOp::FillPath {
                path: outline.clone(),
                transform,
                color: star.fill,
            });
        }
        if let Some(partial) = star.partial.filter(|p| !p.fill.is_transparent()) {
            // The partial rectangle lives inside the star layer: clipped to the star shape and
            // scaled on top of the star's own transform.
            self.ops.push(DrawOp::PushClip {
                path: outline.clone(),
                transform,
            });
            self.ops.push(DrawOp::FillRect {
                rect: partial.rect,
                transform: transform * scale_about(center, partial.scale),
                color: partial.fill,
            });
            self.ops.push(DrawOp::PopClip);
        }
        self.ops.push(DrawOp::StrokePath {
            path: outline,
            transform,
            color: star.outline,
            width: OUTLINE_WIDTH,
        });
        self.ops.push(DrawOp::PopClip);
    }
}

/// Plan for a single row snapshot drawn at its own coordinates.
pub fn compile_frame(snapshot: &FrameSnapshot, canvas: Canvas, background: Rgba8) -> RenderPlan {
    let mut plan = RenderPlan::new(canvas, background);
    plan.push_snapshot(snapshot, Vec2::ZERO);
    plan
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;

use crate::foundation::core::{Canvas, Rect, Rgba8, Size, Vec2};
use crate::foundation::error::{StarrowError, StarrowResult};
use crate::geometry::star::StarSpec;
use crate::rating::config::{AnimationConfig, RatingMode, RowConfig};
use crate::rating::engine::RatingRow;
use crate::render::cpu::{CpuRenderer, FrameRGBA};
use crate::render::plan::RenderPlan;
use crate::render::scene::Scene;

/// Vertical space each gallery row gets.
pub const GALLERY_ROW_HEIGHT: f64 = 60.0;

const GALLERY_MARGIN: f64 = 16.0;

/// Six display rows covering ratings 1 through 6, animated and not. The last one is out of
/// range and stays empty.
pub fn demo_rows() -> StarrowResult<Vec<RowConfig>> {
    let animated = AnimationConfig::animated(0.3);
    let still = AnimationConfig {
        animated: false,
        ..animated
    };
    let rows = [
        (1.0, animated, Rgba8::RED),
        (2.0, still, Rgba8::BLUE),
        (3.0, animated, Rgba8::PURPLE),
        (4.0, animated, Rgba8::YELLOW),
        (5.0, animated, Rgba8::TEAL),
        (6.0, still, Rgba8::ORANGE),
    ];
    rows.into_iter()
        .map(|(rating, animation, color)| -> StarrowResult<RowConfig> {
            Ok(RowConfig::new(
                RatingMode::Display { rating, animation },
                color,
                2.0,
                StarSpec::new(5, color, 20.0)?,
            ))
        })
        .collect()
}

/// Several rows stacked vertically on one canvas, each with its own compositor.
#[derive(Debug)]
pub struct Gallery {
    canvas: Canvas,
    rows: Vec<(RatingRow, Scene)>,
}

impl Gallery {
    pub fn new(configs: Vec<RowConfig>, row_height: f64) -> StarrowResult<Self> {
        if configs.is_empty() {
            return Err(StarrowError::validation("gallery needs at least one row"));
        }
        if !row_height.is_finite() || row_height <= 0.0 {
            return Err(StarrowError::validation("gallery row height must be > 0"));
        }
        let widest = configs
            .iter()
            .map(|c| c.preferred_size().width)
            .fold(0.0, f64::max);
        let width = widest + 2.0 * GALLERY_MARGIN;
        let canvas = Canvas::covering(Size::new(width, row_height * configs.len() as f64))?;

        let mut rows = Vec::with_capacity(configs.len());
        for (i, cfg) in configs.into_iter().enumerate() {
            let mut row = RatingRow::new(cfg)?;
            let mut scene = Scene::new();
            let top = i as f64 * row_height;
            row.layout_finalized(Rect::new(0.0, top, width, top + row_height), &mut scene);
            rows.push((row, scene));
        }
        Ok(Self { canvas, rows })
    }

    pub fn demo() -> StarrowResult<Self> {
        Self::new(demo_rows()?, GALLERY_ROW_HEIGHT)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn rows(&self) -> impl Iterator<Item = &RatingRow> {
        self.rows.iter().map(|(row, _)| row)
    }

    pub fn set_time(&mut self, t: f64) {
        for (_, scene) in &mut self.rows {
            scene.set_time(t);
        }
    }

    pub fn settled_at(&self) -> f64 {
        self.rows
            .iter()
            .map(|(_, scene)| scene.settled_at())
            .fold(0.0, f64::max)
    }

    pub fn render(&self, background: Rgba8) -> StarrowResult<FrameRGBA> {
        let mut plan = RenderPlan::new(self.canvas, background);
        for (_, scene) in &self.rows {
            plan.push_snapshot(&scene.snapshot(), Vec2::ZERO);
        }
        CpuRenderer::new().render(&plan)
    }
}

#[cfg(test)]
#[path = "../tests/unit/gallery.rs"]
mod tests;

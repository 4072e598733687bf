use std::collections::BTreeMap;

use crate::animation::transition::{Layer, Transition};
use crate::foundation::core::{Rect, Rgba8};
use crate::geometry::star::StarGeometry;
use crate::render::surface::RenderSurface;

#[derive(Clone, Debug)]
struct StarLayer {
    geometry: StarGeometry,
    outline: Rgba8,
    fill: Rgba8,
    partial: Option<PartialLayer>,
}

#[derive(Clone, Copy, Debug)]
struct PartialLayer {
    rect: Rect,
    fill: Rgba8,
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    transition: Transition,
    /// Scene time the request arrived at.
    requested_at: f64,
}

impl Scheduled {
    fn elapsed(&self, now: f64) -> f64 {
        now - self.requested_at
    }
}

/// In-memory compositor: keeps star layers with their committed values, resolves scheduled
/// transitions against its own clock and samples presentation state on demand.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    now: f64,
    stars: BTreeMap<usize, StarLayer>,
    scheduled: Vec<Scheduled>,
}

/// Presentation state of one star at the scene's current time.
#[derive(Clone, Debug, PartialEq)]
pub struct StarVisual {
    pub index: usize,
    pub geometry: StarGeometry,
    pub outline: Rgba8,
    pub fill: Rgba8,
    pub scale: f64,
    pub partial: Option<PartialVisual>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartialVisual {
    pub rect: Rect,
    pub fill: Rgba8,
    pub scale: f64,
}

/// Everything needed to draw a row at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    pub time: f64,
    pub stars: Vec<StarVisual>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Moves the clock forward. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.now += dt;
        }
    }

    pub fn set_time(&mut self, t: f64) {
        if t.is_finite() {
            self.now = t;
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn pending_transitions(&self) -> usize {
        self.scheduled.len()
    }

    /// Scene time after which no scheduled transition changes anymore.
    pub fn settled_at(&self) -> f64 {
        self.scheduled
            .iter()
            .map(|s| s.requested_at + s.transition.end())
            .fold(self.now, f64::max)
    }

    pub fn is_animating(&self) -> bool {
        self.settled_at() > self.now
    }

    fn sample_color(&self, layer: Layer, committed: Rgba8) -> Rgba8 {
        // Later requests override earlier ones on the same property.
        self.scheduled
            .iter()
            .rev()
            .filter(|s| s.transition.layer == layer)
            .find_map(|s| s.transition.sample_color(committed, s.elapsed(self.now)))
            .unwrap_or(committed)
    }

    fn sample_scale(&self, layer: Layer) -> f64 {
        self.scheduled
            .iter()
            .rev()
            .filter(|s| s.transition.layer == layer)
            .find_map(|s| s.transition.sample_scale(1.0, s.elapsed(self.now)))
            .unwrap_or(1.0)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let stars = self
            .stars
            .iter()
            .map(|(&index, star)| StarVisual {
                index,
                geometry: star.geometry.clone(),
                outline: star.outline,
                fill: self.sample_color(Layer::Star(index), star.fill),
                scale: self.sample_scale(Layer::Star(index)),
                partial: star.partial.map(|p| PartialVisual {
                    rect: p.rect,
                    fill: self.sample_color(Layer::Partial(index), p.fill),
                    scale: self.sample_scale(Layer::Partial(index)),
                }),
            })
            .collect();
        FrameSnapshot {
            time: self.now,
            stars,
        }
    }
}

impl RenderSurface for Scene {
    fn install_star(&mut self, index: usize, geometry: &StarGeometry, outline: Rgba8) {
        self.stars.insert(
            index,
            StarLayer {
                geometry: geometry.clone(),
                outline,
                fill: Rgba8::TRANSPARENT,
                partial: None,
            },
        );
    }

    fn install_partial_fill(&mut self, index: usize, rect: Rect) {
        match self.stars.get_mut(&index) {
            Some(star) => {
                star.partial = Some(PartialLayer {
                    rect,
                    fill: Rgba8::TRANSPARENT,
                });
            }
            None => tracing::warn!(index, "partial fill for unknown star"),
        }
    }

    fn commit_fill(&mut self, layer: Layer, color: Rgba8) {
        match layer {
            Layer::Star(i) => match self.stars.get_mut(&i) {
                Some(star) => star.fill = color,
                None => tracing::warn!(index = i, "fill for unknown star"),
            },
            Layer::Partial(i) => match self.stars.get_mut(&i).and_then(|s| s.partial.as_mut()) {
                Some(partial) => partial.fill = color,
                None => tracing::warn!(index = i, "fill for missing partial layer"),
            },
        }
    }

    fn schedule(&mut self, transition: Transition) {
        self.scheduled.push(Scheduled {
            transition,
            requested_at: self.now,
        });
    }

    fn cancel_transitions(&mut self) {
        self.scheduled.clear();
    }

    fn clear_fills(&mut self) {
        for star in self.stars.values_mut() {
            star.fill = Rgba8::TRANSPARENT;
            star.partial = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;

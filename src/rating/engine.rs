use crate::animation::sequencer::fill_sequence;
use crate::animation::transition::Layer;
use crate::foundation::core::{Point, Rect, Size, Vec2};
use crate::foundation::error::StarrowResult;
use crate::geometry::star::StarGeometry;
use crate::rating::config::{RatingMode, RowConfig};
use crate::rating::fill::{RatingFill, STAR_COUNT, StarFill};
use crate::render::surface::RenderSurface;

/// Receives the rating a user tapped in. Fired at most once per row.
pub trait RatingListener {
    fn user_did_rate(&mut self, rating: f64);
}

impl<F: FnMut(f64)> RatingListener for F {
    fn user_did_rate(&mut self, rating: f64) {
        self(rating)
    }
}

/// Result of [`RatingRow::apply_rating`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ApplyOutcome {
    /// Fills were issued to the surface.
    Applied(RatingFill),
    /// The row has no geometry yet; the rating is applied on the first layout pass.
    Deferred,
    /// Rating outside `(0, STAR_COUNT]`; nothing changed.
    Ignored,
}

/// One-time geometry construction.
#[derive(Clone, Debug)]
enum LayoutState {
    Pending { rating: Option<f64> },
    Built { row: Rect, stars: Vec<StarGeometry> },
}

/// One-shot user rating latch. Never goes back to `Awaiting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UserRating {
    Awaiting,
    Rated,
}

/// A horizontal row of stars that shows a rating or lets the user set one.
///
/// The host places the row, reports its bounding box through [`RatingRow::layout_finalized`]
/// and forwards pointer releases to [`RatingRow::handle_pointer_up`]. Everything visual goes
/// through the [`RenderSurface`] passed to those calls.
pub struct RatingRow {
    config: RowConfig,
    layout: LayoutState,
    user: UserRating,
    current_rating: f64,
    fills: [StarFill; STAR_COUNT],
    listener: Option<Box<dyn RatingListener>>,
}

impl RatingRow {
    pub fn new(config: RowConfig) -> StarrowResult<Self> {
        config.validate()?;
        let rating = match config.mode {
            RatingMode::Display { rating, .. } => Some(rating),
            RatingMode::Interactive { .. } => None,
        };
        Ok(Self {
            config,
            layout: LayoutState::Pending { rating },
            user: UserRating::Awaiting,
            current_rating: 0.0,
            fills: [StarFill::Empty; STAR_COUNT],
            listener: None,
        })
    }

    pub fn with_listener(
        config: RowConfig,
        listener: impl RatingListener + 'static,
    ) -> StarrowResult<Self> {
        let mut row = Self::new(config)?;
        row.listener = Some(Box::new(listener));
        Ok(row)
    }

    pub fn config(&self) -> &RowConfig {
        &self.config
    }

    pub fn mode(&self) -> RatingMode {
        self.config.mode
    }

    /// Size the host should give the row. Depends only on configuration.
    pub fn preferred_size(&self) -> Size {
        self.config.preferred_size()
    }

    pub fn current_rating(&self) -> f64 {
        self.current_rating
    }

    pub fn fills(&self) -> &[StarFill; STAR_COUNT] {
        &self.fills
    }

    pub fn has_been_set_by_user(&self) -> bool {
        self.user == UserRating::Rated
    }

    pub fn is_laid_out(&self) -> bool {
        matches!(self.layout, LayoutState::Built { .. })
    }

    /// Row rectangle in host coordinates, once laid out.
    pub fn row_bounds(&self) -> Option<Rect> {
        match &self.layout {
            LayoutState::Built { row, .. } => Some(*row),
            LayoutState::Pending { .. } => None,
        }
    }

    pub fn stars(&self) -> &[StarGeometry] {
        match &self.layout {
            LayoutState::Built { stars, .. } => stars,
            LayoutState::Pending { .. } => &[],
        }
    }

    /// Converts a host-space point into the row's own coordinate space.
    pub fn to_row_space(&self, host: Point) -> Option<Point> {
        self.row_bounds().map(|row| host - row.origin().to_vec2())
    }

    /// Builds star geometry inside `bounds` (the row centered at its preferred size) and applies
    /// any deferred rating. Only the first call does anything; returns whether it did.
    #[tracing::instrument(skip(self, surface))]
    pub fn layout_finalized<S: RenderSurface + ?Sized>(
        &mut self,
        bounds: Rect,
        surface: &mut S,
    ) -> bool {
        let rating = match &self.layout {
            LayoutState::Pending { rating } => *rating,
            LayoutState::Built { .. } => {
                tracing::trace!("row already laid out");
                return false;
            }
        };

        let size = self.preferred_size();
        let row = Rect::from_center_size(bounds.center(), size);
        let radius = self.config.star.radius();
        let pitch = 2.0 * radius + self.config.spacing;
        let stars: Vec<StarGeometry> = (0..STAR_COUNT)
            .map(|i| {
                let center = row.origin() + Vec2::new(radius + i as f64 * pitch, radius);
                StarGeometry::from_spec(&self.config.star, center)
            })
            .collect();
        for (i, star) in stars.iter().enumerate() {
            surface.install_star(i, star, self.config.star.outline_color());
        }
        self.layout = LayoutState::Built { row, stars };
        tracing::debug!(?row, "star geometry built");

        if let Some(rating) = rating {
            self.apply_rating(rating, surface);
        }
        true
    }

    /// Fills stars for `rating`, replacing any previous fill and cancelling its transitions.
    #[tracing::instrument(skip(self, surface))]
    pub fn apply_rating<S: RenderSurface + ?Sized>(
        &mut self,
        rating: f64,
        surface: &mut S,
    ) -> ApplyOutcome {
        let Some(fill) = RatingFill::from_rating(rating) else {
            tracing::trace!("rating out of range, ignored");
            return ApplyOutcome::Ignored;
        };
        let LayoutState::Built { stars, .. } = &self.layout else {
            self.layout = LayoutState::Pending {
                rating: Some(rating),
            };
            tracing::trace!("row not laid out yet, rating deferred");
            return ApplyOutcome::Deferred;
        };

        surface.cancel_transitions();
        surface.clear_fills();

        if let Some(idx) = fill.partial_index() {
            surface.install_partial_fill(idx, stars[idx].partial_fill_rect(fill.partial));
        }

        let color = self.config.fill_color;
        let animation = self.config.mode.animation();
        if animation.animated {
            for transition in fill_sequence(&fill, color, animation.duration, animation.ease) {
                tracing::trace!(?transition, "schedule");
                surface.schedule(transition);
            }
        } else {
            for i in 0..fill.full {
                surface.commit_fill(Layer::Star(i), color);
            }
            if let Some(idx) = fill.partial_index() {
                surface.commit_fill(Layer::Partial(idx), color);
            }
        }

        self.current_rating = rating;
        self.fills = fill.stars();
        tracing::debug!(full = fill.full, partial = fill.partial, "rating applied");
        ApplyOutcome::Applied(fill)
    }

    /// Turns a pointer release at `location` (row space) into a user rating.
    ///
    /// Only interactive rows react, and only to the first in-range tap. Returns the raw rating
    /// reported to the listener.
    pub fn handle_pointer_up<S: RenderSurface + ?Sized>(
        &mut self,
        location: Point,
        surface: &mut S,
    ) -> Option<f64> {
        match self.config.mode {
            RatingMode::Display { .. } => {
                tracing::trace!("display row ignores input");
                None
            }
            RatingMode::Interactive { .. } => {
                if self.user == UserRating::Rated {
                    tracing::trace!("user already rated, tap ignored");
                    return None;
                }
                let width = self.row_bounds()?.width();
                let rating = location.x / width * STAR_COUNT as f64;
                match self.apply_rating(rating, surface) {
                    ApplyOutcome::Applied(_) => {
                        self.user = UserRating::Rated;
                        tracing::debug!(rating, "user rated");
                        if let Some(listener) = self.listener.as_mut() {
                            listener.user_did_rate(rating);
                        }
                        Some(rating)
                    }
                    ApplyOutcome::Deferred | ApplyOutcome::Ignored => None,
                }
            }
        }
    }
}

impl std::fmt::Debug for RatingRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingRow")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("user", &self.user)
            .field("current_rating", &self.current_rating)
            .field("fills", &self.fills)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rating/engine.rs"]
mod tests;

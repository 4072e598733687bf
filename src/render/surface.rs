use crate::animation::transition::{Layer, Transition};
use crate::foundation::core::{Rect, Rgba8};
use crate::geometry::star::StarGeometry;

/// Rendering subsystem a star row issues its draw and animate instructions to.
///
/// All calls happen on the thread that owns the row. Implementations own timing: a scheduled
/// [`Transition`]'s delay counts from the moment `schedule` is called, and the row never waits
/// on or polls a transition.
pub trait RenderSurface {
    /// Create the layer for star `index`: outline stroked with `outline`, fill transparent.
    fn install_star(&mut self, index: usize, geometry: &StarGeometry, outline: Rgba8);

    /// Create a transparent partial-fill layer inside star `index`, clipped to that star.
    fn install_partial_fill(&mut self, index: usize, rect: Rect);

    /// Set the committed fill color of a layer.
    fn commit_fill(&mut self, layer: Layer, color: Rgba8);

    fn schedule(&mut self, transition: Transition);

    /// Drop every in-flight or held transition.
    fn cancel_transitions(&mut self);

    /// Reset every star fill to transparent and remove partial-fill layers.
    fn clear_fills(&mut self);
}

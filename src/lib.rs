//! Starrow is a star-rating control: a horizontal row of star shapes that either shows a fixed
//! rating or lets the user tap one in.
//!
//! The crate owns the parts with real math and state and leaves view plumbing to the host:
//!
//! 1. **Geometry**: [`StarGeometry`] builds the outline of a K-cornered star and the disc its
//!    fills are clipped to.
//! 2. **Rating**: [`RatingRow`] lays out five stars once the host reports a bounding box, maps a
//!    rating in `(0, 5]` to full, partial and empty stars, and turns a pointer release into a
//!    user rating reported once to a [`RatingListener`].
//! 3. **Animation**: fills can sweep in left to right ([`fill_sequence`]), each star fading to the
//!    fill color and pulsing in scale.
//! 4. **Rendering**: the row talks to a [`RenderSurface`]. [`Scene`] is an in-memory compositor
//!    implementing it; [`compile_frame`] and [`CpuRenderer`] turn a [`Scene`] snapshot into
//!    pixels.
//!
//! Everything runs on the thread that owns the row. Nothing blocks, and the row never waits on
//! an animation.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod gallery;
mod geometry;
mod rating;
mod render;

pub use animation::ease::Ease;
pub use animation::sequencer::{PULSE_SCALE, STAGGER_DELAY, fill_sequence, partial_pulse_scale};
pub use animation::transition::{Layer, Transition, TransitionTarget};
pub use foundation::core::{Affine, BezPath, Canvas, Circle, Point, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{StarrowError, StarrowResult};
pub use gallery::{GALLERY_ROW_HEIGHT, Gallery, demo_rows};
pub use geometry::star::{DIAMETER_INCREMENT, OUTLINE_WIDTH, StarGeometry, StarSpec};
pub use rating::config::{AnimationConfig, RatingMode, RowConfig};
pub use rating::engine::{ApplyOutcome, RatingListener, RatingRow};
pub use rating::fill::{RatingFill, STAR_COUNT, StarFill};
pub use render::cpu::{CpuRenderer, FrameRGBA};
pub use render::plan::{DrawOp, RenderPlan, compile_frame};
pub use render::render_scene;
pub use render::scene::{FrameSnapshot, PartialVisual, Scene, StarVisual};
pub use render::surface::RenderSurface;

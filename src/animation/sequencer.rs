use crate::animation::ease::Ease;
use crate::animation::transition::{Layer, Transition, TransitionTarget};
use crate::foundation::core::Rgba8;
use crate::rating::fill::RatingFill;

/// Start offset between consecutive stars, producing a left-to-right sweep.
pub const STAGGER_DELAY: f64 = 0.1;

/// Peak scale of a fully filled star's pulse.
pub const PULSE_SCALE: f64 = 1.2;

/// Peak scale of the partial fill's pulse, proportional to how much of the star it covers.
pub fn partial_pulse_scale(partial: f64) -> f64 {
    1.0 + (PULSE_SCALE - 1.0) * partial
}

/// Transitions that animate `fill` in with `color`.
///
/// Full star `i` starts at `i * STAGGER_DELAY`; the partial star, if any, starts right after the
/// last full one. Each star gets a held color transition and a self-reversing scale pulse.
pub fn fill_sequence(fill: &RatingFill, color: Rgba8, duration: f64, ease: Ease) -> Vec<Transition> {
    let pair = |layer: Layer, delay: f64, peak: f64| {
        [
            Transition {
                layer,
                target: TransitionTarget::FillColor(color),
                delay,
                duration,
                ease,
                autoreverse: false,
                hold: true,
            },
            Transition {
                layer,
                target: TransitionTarget::Scale(peak),
                delay,
                duration,
                ease,
                autoreverse: true,
                hold: false,
            },
        ]
    };

    let mut out = Vec::with_capacity(2 * (fill.full + 1));
    for i in 0..fill.full {
        out.extend(pair(Layer::Star(i), i as f64 * STAGGER_DELAY, PULSE_SCALE));
    }
    if let Some(idx) = fill.partial_index() {
        out.extend(pair(
            Layer::Partial(idx),
            fill.full as f64 * STAGGER_DELAY,
            partial_pulse_scale(fill.partial),
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequencer.rs"]
mod tests;

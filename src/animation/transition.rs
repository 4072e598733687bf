use crate::animation::ease::Ease;
use crate::foundation::core::Rgba8;

/// Render layer a transition or fill is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// The star at this index (its fill masked to the star shape).
    Star(usize),
    /// The partial-fill rectangle hosted inside the star at this index.
    Partial(usize),
}

/// Animated property and the value it moves towards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionTarget {
    FillColor(Rgba8),
    Scale(f64),
}

/// A fire-and-forget transition request.
///
/// `delay` is relative to the moment the request is handed to a surface. With `autoreverse`
/// the transition plays forward over `duration`, then backward over another `duration`. With
/// `hold` the final value is kept after completion; otherwise the property snaps back to its
/// committed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub layer: Layer,
    pub target: TransitionTarget,
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
    pub autoreverse: bool,
    pub hold: bool,
}

impl Transition {
    /// Time after the request at which the transition stops changing.
    pub fn end(&self) -> f64 {
        let passes = if self.autoreverse { 2.0 } else { 1.0 };
        self.delay + passes * self.duration
    }

    /// Interpolation weight from the committed value (0) to the target (1), `elapsed` seconds
    /// after the request. `None` when the transition has no effect at that time.
    pub fn weight_at(&self, elapsed: f64) -> Option<f64> {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return None;
        }
        if local >= self.end() - self.delay {
            if !self.hold {
                return None;
            }
            return Some(if self.autoreverse { 0.0 } else { 1.0 });
        }
        let forward = if local <= self.duration {
            local / self.duration
        } else {
            // Mirrored second pass.
            1.0 - (local - self.duration) / self.duration
        };
        Some(self.ease.apply(forward))
    }

    pub fn sample_color(&self, committed: Rgba8, elapsed: f64) -> Option<Rgba8> {
        let TransitionTarget::FillColor(to) = self.target else {
            return None;
        };
        self.weight_at(elapsed).map(|w| committed.lerp(to, w))
    }

    pub fn sample_scale(&self, committed: f64, elapsed: f64) -> Option<f64> {
        let TransitionTarget::Scale(to) = self.target else {
            return None;
        };
        self.weight_at(elapsed)
            .map(|w| crate::foundation::math::lerp(committed, to, w))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;

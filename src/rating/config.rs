use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{StarrowError, StarrowResult};
use crate::geometry::star::StarSpec;
use crate::rating::fill::STAR_COUNT;

/// Whether ratings are animated in, and how.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    pub animated: bool,
    /// Seconds, per star.
    pub duration: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl AnimationConfig {
    pub fn immediate() -> Self {
        Self::default()
    }

    pub fn animated(duration: f64) -> Self {
        Self {
            animated: true,
            duration,
            ease: Ease::Linear,
        }
    }

    pub fn validate(&self) -> StarrowResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(StarrowError::validation(format!(
                "animation duration must be finite and >= 0, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}

/// What the row does: show a known rating, or collect one from the user.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatingMode {
    /// Fixed rating, applied once the row has been laid out. Never reacts to input.
    Display {
        rating: f64,
        #[serde(default)]
        animation: AnimationConfig,
    },
    /// Waits for a single tap and reports it.
    Interactive {
        #[serde(default)]
        animation: AnimationConfig,
    },
}

impl RatingMode {
    pub fn display(rating: f64) -> Self {
        Self::Display {
            rating,
            animation: AnimationConfig::immediate(),
        }
    }

    pub fn interactive(animation: AnimationConfig) -> Self {
        Self::Interactive { animation }
    }

    pub fn animation(&self) -> AnimationConfig {
        match *self {
            Self::Display { animation, .. } | Self::Interactive { animation } => animation,
        }
    }
}

/// Host-supplied construction input for a star row.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RowConfig {
    pub mode: RatingMode,
    pub fill_color: Rgba8,
    /// Gap between neighbouring star boxes.
    pub spacing: f64,
    pub star: StarSpec,
}

impl RowConfig {
    pub fn new(mode: RatingMode, fill_color: Rgba8, spacing: f64, star: StarSpec) -> Self {
        Self {
            mode,
            fill_color,
            spacing,
            star,
        }
    }

    pub fn validate(&self) -> StarrowResult<()> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(StarrowError::validation(format!(
                "spacing must be finite and >= 0, got {}",
                self.spacing
            )));
        }
        if let RatingMode::Display { rating, .. } = self.mode {
            // Out-of-range ratings are a defined no-op; NaN and infinities are not ratings.
            if !rating.is_finite() {
                return Err(StarrowError::validation("display rating must be finite"));
            }
        }
        self.mode.animation().validate()
    }

    /// `(N * 2R + (N - 1) * spacing, 2R)`.
    pub fn preferred_size(&self) -> Size {
        let n = STAR_COUNT as f64;
        let diameter = 2.0 * self.star.radius();
        Size::new(n * diameter + (n - 1.0) * self.spacing, diameter)
    }

    pub fn from_json_str(s: &str) -> StarrowResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| StarrowError::config(format!("parse row config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> StarrowResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            StarrowError::config(format!("read row config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> StarrowResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StarrowError::config(format!("serialize row config: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rating/config.rs"]
mod tests;

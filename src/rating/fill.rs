/// Number of stars in a row.
pub const STAR_COUNT: usize = 5;

/// Split of a rating into whole stars and the fraction of the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingFill {
    pub full: usize,
    pub partial: f64,
}

impl RatingFill {
    /// `None` for ratings outside `(0, STAR_COUNT]` (and NaN).
    pub fn from_rating(rating: f64) -> Option<Self> {
        if !(rating > 0.0 && rating <= STAR_COUNT as f64) {
            return None;
        }
        let full = rating.floor();
        Some(Self {
            full: full as usize,
            partial: rating - full,
        })
    }

    pub fn has_partial(&self) -> bool {
        self.partial > 0.0
    }

    /// Index of the partially filled star, if any.
    pub fn partial_index(&self) -> Option<usize> {
        self.has_partial().then_some(self.full)
    }

    pub fn star(&self, index: usize) -> StarFill {
        if index < self.full {
            StarFill::Full
        } else if self.partial_index() == Some(index) {
            StarFill::Partial(self.partial)
        } else {
            StarFill::Empty
        }
    }

    pub fn stars(&self) -> [StarFill; STAR_COUNT] {
        std::array::from_fn(|i| self.star(i))
    }
}

/// Fill decision for one star.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StarFill {
    #[default]
    Empty,
    Partial(f64),
    Full,
}

#[cfg(test)]
#[path = "../../tests/unit/rating/fill.rs"]
mod tests;

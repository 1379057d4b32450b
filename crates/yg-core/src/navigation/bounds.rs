use crate::{GridError, Result};

/// Inclusive year bounds of a grid
///
/// Only [`YearBounds::new`] and [`YearBounds::single`] build values, so
/// `min <= max` always holds and [`YearBounds::clamp`] never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearBounds {
    min: i32,
    max: i32,
}

impl YearBounds {
    /// Create bounds, rejecting an inverted range
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(GridError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds covering exactly one year
    pub fn single(year: i32) -> Self {
        Self { min: year, max: year }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Whether `year` lies within the bounds
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Saturate `year` at the nearest edge
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }

    /// Number of years covered
    pub fn span(&self) -> usize {
        // min <= max, so the difference is non-negative and fits in i64
        (i64::from(self.max) - i64::from(self.min) + 1) as usize
    }
}

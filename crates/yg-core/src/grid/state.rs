//! Grid state

use crate::config::GridConfig;
use crate::date_range::{DateBound, YearList};
use crate::navigation::YearBounds;

/// Committed and focused year of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionState {
    /// Year acknowledged by the host
    pub committed_year: i32,
    /// Year highlighted for keyboard interaction
    pub focused_year: i32,
}

impl SelectionState {
    /// Both years on `year`
    pub fn at(year: i32) -> Self {
        Self {
            committed_year: year,
            focused_year: year,
        }
    }

    /// Whether keyboard focus has moved away from the committed year
    pub fn is_navigating(&self) -> bool {
        self.committed_year != self.focused_year
    }
}

/// Full state owned by one grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub years: YearList,
    pub selection: SelectionState,
    /// Column stride used for row moves
    pub columns: usize,
    /// Whether data updates ask the host to scroll to the committed year
    pub scroll_on_update: bool,
}

impl GridState {
    /// State for `years` with `selected` clamped into range
    pub fn new(years: YearList, selected: i32, columns: usize) -> Self {
        let year = years.bounds().clamp(selected);
        Self {
            years,
            selection: SelectionState::at(year),
            columns: columns.max(1),
            scroll_on_update: true,
        }
    }

    /// State for a grid that has not received host data yet
    ///
    /// An inverted configured range collapses to its lower year.
    pub fn from_config(config: &GridConfig) -> Self {
        let min = config.min_date.year();
        let bounds = YearBounds::new(min, config.max_date.year()).unwrap_or_else(|_| YearBounds::single(min));
        let mut state = Self::new(YearList::new(bounds), DateBound::today().year(), config.columns);
        state.scroll_on_update = config.scroll_on_update;
        state
    }

    pub fn bounds(&self) -> YearBounds {
        self.years.bounds()
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::DEFAULT_COLUMNS;

    #[test]
    fn test_new_clamps_selection() {
        let years = YearList::new(YearBounds::new(2016, 2026).unwrap());
        let state = GridState::new(years, 2030, 0);
        assert_eq!(state.selection, SelectionState::at(2026));
        assert_eq!(state.columns, 1);
    }

    #[test]
    fn test_default_uses_configured_range() {
        let state = GridState::default();
        assert_eq!(state.bounds().min(), 1970);
        assert_eq!(state.bounds().max(), 2100);
        assert_eq!(state.columns, DEFAULT_COLUMNS);
        assert!(!state.selection.is_navigating());
    }
}

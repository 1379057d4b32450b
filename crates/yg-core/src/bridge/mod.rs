//! Render/event bridge between the grid state and a host UI
//!
//! Turns the year list and selection into declarative view records, and raw
//! host input into grid inputs (see [`input`]).

use std::fmt;
use std::sync::Arc;

use crate::date_range::{DateBound, YearList};
use crate::grid::SelectionState;

pub mod input;

pub use input::{normalize_input, EventTarget, KeyCode, KeyMap, RawInput, TargetKind};

/// Formats the label of a year button from January 1st of that year
pub type YearFormatter = Arc<dyn Fn(DateBound) -> String + Send + Sync>;

/// Render request supplied by the host
#[derive(Clone)]
pub struct GridData {
    /// Currently selected date
    pub date: DateBound,
    /// Lower bound, inclusive
    pub min: DateBound,
    /// Upper bound, inclusive
    pub max: DateBound,
    /// Year label formatter; the grid is not ready without one
    pub formatter: Option<YearFormatter>,
}

impl GridData {
    pub fn new(date: DateBound, min: DateBound, max: DateBound) -> Self {
        Self { date, min, max, formatter: None }
    }

    pub fn with_formatter(mut self, formatter: YearFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// The part of the request that drives a state reset
    pub fn key(&self) -> (DateBound, DateBound, DateBound) {
        (self.date, self.min, self.max)
    }
}

impl Default for GridData {
    /// Today as both selection and lower bound, [`DateBound::max_date`] as upper bound
    fn default() -> Self {
        let today = DateBound::today();
        Self::new(today, today, DateBound::max_date())
    }
}

impl fmt::Debug for GridData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridData")
            .field("date", &self.date)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// View record for one year button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearItem {
    pub year: i32,
    pub label: String,
    /// The committed year
    pub is_selected: bool,
    /// The focused year; the only item reachable with Tab
    pub is_keyboard_reachable: bool,
}

/// Build the view records for every year in `years`
pub fn year_items(years: &YearList, selection: &SelectionState, formatter: &YearFormatter) -> Vec<YearItem> {
    years
        .iter()
        .map(|year| YearItem {
            year,
            label: year_label(year, formatter),
            is_selected: year == selection.committed_year,
            is_keyboard_reachable: year == selection.focused_year,
        })
        .collect()
}

fn year_label(year: i32, formatter: &YearFormatter) -> String {
    match DateBound::year_start(year) {
        Some(date) => formatter(date),
        None => year.to_string(),
    }
}

/// Row and column of `year` in a grid laid out `columns` wide
pub fn row_col(years: &YearList, year: i32, columns: usize) -> Option<(usize, usize)> {
    let columns = columns.max(1);
    years.position(year).map(|idx| (idx / columns, idx % columns))
}

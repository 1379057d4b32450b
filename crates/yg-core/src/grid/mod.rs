//! Year grid state machine
//!
//! The grid has a single idle state: every input is reduced to completion
//! synchronously by [`reduce`], which returns the next state and the effects
//! the host must carry out. [`GridEngine`] wraps the reducer with shared
//! state, input normalization and event publication.

use crate::date_range::{DateBound, YearList};
use crate::navigation::{NavigationCommand, YearBounds};

mod engine;
mod reducer;
mod state;

pub use engine::GridEngine;
pub use reducer::reduce;
pub use state::{GridState, SelectionState};

/// Input accepted by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridInput {
    /// New host data: a validated year list and the selected date
    DataUpdate { years: YearList, selected: DateBound },
    /// Keyboard or pointer command
    Command(NavigationCommand),
    /// Keys left to the host's own focus traversal (Tab)
    Passthrough,
}

/// Side effects produced by one reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEffect {
    /// Report a committed year to the host
    YearUpdated { year: i32 },
    /// Scroll `year` into view, and focus it when `move_focus` is set
    FocusYear { year: i32, move_focus: bool },
}

/// Snapshot of the grid passed to hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridContext {
    pub bounds: YearBounds,
    pub selection: SelectionState,
    pub columns: usize,
}

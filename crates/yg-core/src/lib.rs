//! Core functionality for the year selection grid
//!
//! This crate provides the date arithmetic, navigation rules and state
//! management behind a date picker's year grid. It has no rendering of its
//! own: a host UI feeds it render requests and raw input, and receives year
//! items, year-updated events and focus/scroll requests back.

pub mod bridge;
pub mod config;
pub mod date_range;
pub mod events;
pub mod grid;
pub mod navigation;

use thiserror::Error;

// Re-export commonly used types
pub use bridge::{GridData, YearFormatter, YearItem, RawInput, EventTarget, KeyCode, KeyMap};
pub use config::GridConfig;
pub use date_range::{DateBound, YearList, build_year_list, normalize_to_utc, resolve_date};
pub use events::{EventBus, FocusRequested, YearUpdated};
pub use grid::{GridContext, GridEffect, GridEngine, GridInput, GridState, SelectionState};
pub use navigation::{NavigationCommand, YearBounds, resolve_next_year};

/// Errors that can occur in year grid operations
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid year range: min year {min} is after max year {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;

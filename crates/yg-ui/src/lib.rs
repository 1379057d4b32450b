//! User interface components for the year selection grid
//!
//! This crate hosts the `yg-core` grid engine inside egui: it draws the year
//! buttons, forwards clicks and key presses to the engine and carries out
//! the engine's focus/scroll requests.

pub mod theme;
pub mod widget_utils;
pub mod year_grid;

/// Re-export commonly used types
pub use theme::{Theme, apply_theme};
pub use widget_utils::{WidgetId, ScrollAreaExt, GridExt};
pub use year_grid::{YearGridWidget, YearGridStyle, YearGridResponse, key_code};

// Panel IDs
pub mod panel_ids {
    pub const YEAR_GRID: &str = "year_grid";
    pub const STATUS: &str = "status_panel";
}

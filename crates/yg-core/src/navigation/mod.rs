use serde::{Serialize, Deserialize};

mod bounds;
mod resolver;

pub use bounds::YearBounds;
pub use resolver::{resolve_next_year, DEFAULT_COLUMNS};

/// Navigation commands understood by the year grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationCommand {
    /// One row up (`columns` years back)
    MoveUp,
    /// One row down (`columns` years forward)
    MoveDown,
    /// One year back
    MoveLeft,
    /// One year forward
    MoveRight,
    /// Commit the currently focused year
    Activate,
    /// Pointer selection of a specific year
    DirectSelect(i32),
}

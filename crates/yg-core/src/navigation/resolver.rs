//! Next-year resolution for keyboard and pointer navigation

use super::NavigationCommand;

/// Column stride used when the host does not configure one
pub const DEFAULT_COLUMNS: usize = 3;

/// Resolve the year focused after applying `command`
///
/// Movement clamps at the range edges instead of wrapping: moving right from
/// `max_year` stays on `max_year`, and a row move that would leave the range
/// lands on the nearest edge. `DirectSelect` is returned as-is and `Activate`
/// keeps the current year.
///
/// Total over every input. An inverted range leaves `current` untouched and a
/// zero stride behaves like a single column.
pub fn resolve_next_year(
    command: NavigationCommand,
    current: i32,
    min_year: i32,
    max_year: i32,
    columns: usize,
) -> i32 {
    if min_year > max_year {
        return current;
    }

    let stride = i32::try_from(columns.max(1)).unwrap_or(i32::MAX);

    let target = match command {
        NavigationCommand::DirectSelect(year) => return year,
        NavigationCommand::Activate => return current,
        NavigationCommand::MoveLeft => current.saturating_sub(1),
        NavigationCommand::MoveRight => current.saturating_add(1),
        NavigationCommand::MoveUp => current.saturating_sub(stride),
        NavigationCommand::MoveDown => current.saturating_add(stride),
    };

    target.clamp(min_year, max_year)
}

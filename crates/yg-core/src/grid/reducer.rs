use tracing::{debug, info, warn};

use super::{GridEffect, GridInput, GridState, SelectionState};
use crate::navigation::{resolve_next_year, NavigationCommand};

/// Pure grid reducer
///
/// Takes the current state and one input, returns the next state and the
/// effects to carry out. No I/O happens here; the effects describe it.
pub fn reduce(state: GridState, input: GridInput) -> (GridState, Vec<GridEffect>) {
    match input {
        GridInput::DataUpdate { years, selected } => {
            let year = years.bounds().clamp(selected.year());
            debug!(
                "Grid data updated: years {}..={}, selected {}",
                years.first(),
                years.last(),
                selected
            );

            let mut new_state = state;
            new_state.years = years;
            new_state.selection = SelectionState::at(year);

            let effects = if new_state.scroll_on_update {
                vec![GridEffect::FocusYear { year, move_focus: false }]
            } else {
                Vec::new()
            };
            (new_state, effects)
        }

        GridInput::Command(NavigationCommand::DirectSelect(year)) => {
            if !state.years.contains(year) {
                warn!(
                    "Ignoring selection of year {} outside {}..={}",
                    year,
                    state.years.first(),
                    state.years.last()
                );
                return (state, Vec::new());
            }

            info!("Year {} selected", year);
            let mut new_state = state;
            new_state.selection = SelectionState::at(year);
            (new_state, vec![GridEffect::YearUpdated { year }])
        }

        GridInput::Command(NavigationCommand::Activate) => {
            let year = state.selection.focused_year;
            info!("Year {} activated", year);
            let mut new_state = state;
            new_state.selection = SelectionState::at(year);
            (new_state, vec![GridEffect::YearUpdated { year }])
        }

        GridInput::Command(command) => {
            let bounds = state.bounds();
            let current = bounds.clamp(state.selection.focused_year);
            let year = resolve_next_year(command, current, bounds.min(), bounds.max(), state.columns);
            debug!("{:?}: focus {} -> {}", command, current, year);

            let mut new_state = state;
            new_state.selection.focused_year = year;
            (new_state, vec![GridEffect::FocusYear { year, move_focus: true }])
        }

        GridInput::Passthrough => (state, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::{build_year_list, DateBound};

    fn date(s: &str) -> DateBound {
        s.parse().unwrap()
    }

    /// min 2016-01-01, max 2026-12-31, selected 2020-06-15
    fn scenario_state() -> GridState {
        let years = build_year_list(date("2016-01-01"), date("2026-12-31")).unwrap();
        let (state, _) = reduce(
            GridState::default(),
            GridInput::DataUpdate { years, selected: date("2020-06-15") },
        );
        state
    }

    fn command(state: GridState, command: NavigationCommand) -> (GridState, Vec<GridEffect>) {
        reduce(state, GridInput::Command(command))
    }

    #[test]
    fn test_data_update_resets_selection_and_scrolls() {
        let years = build_year_list(date("2016-01-01"), date("2026-12-31")).unwrap();
        let mut state = GridState::default();
        state.selection = SelectionState { committed_year: 1999, focused_year: 2001 };

        let (new_state, effects) = reduce(state, GridInput::DataUpdate { years, selected: date("2020-06-15") });

        assert_eq!(new_state.years.to_vec(), (2016..=2026).collect::<Vec<_>>());
        assert_eq!(new_state.selection, SelectionState::at(2020));
        assert_eq!(effects, vec![GridEffect::FocusYear { year: 2020, move_focus: false }]);
    }

    #[test]
    fn test_data_update_without_scroll() {
        let years = build_year_list(date("2016-01-01"), date("2026-12-31")).unwrap();
        let mut state = GridState::default();
        state.scroll_on_update = false;

        let (_, effects) = reduce(state, GridInput::DataUpdate { years, selected: date("2020-06-15") });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_three_moves_right_only_move_focus() {
        let mut state = scenario_state();
        let mut all_effects = Vec::new();
        for _ in 0..3 {
            let (next, effects) = command(state, NavigationCommand::MoveRight);
            state = next;
            all_effects.extend(effects);
        }

        assert_eq!(state.selection.focused_year, 2023);
        assert_eq!(state.selection.committed_year, 2020);
        assert!(!all_effects.iter().any(|e| matches!(e, GridEffect::YearUpdated { .. })));
        assert_eq!(all_effects.last(), Some(&GridEffect::FocusYear { year: 2023, move_focus: true }));
    }

    #[test]
    fn test_move_right_at_max_stays() {
        let mut state = scenario_state();
        state.selection.focused_year = 2026;

        let (state, effects) = command(state, NavigationCommand::MoveRight);
        assert_eq!(state.selection.focused_year, 2026);
        assert_eq!(effects, vec![GridEffect::FocusYear { year: 2026, move_focus: true }]);
    }

    #[test]
    fn test_row_moves_use_column_stride() {
        let state = scenario_state();
        let (state, _) = command(state, NavigationCommand::MoveDown);
        assert_eq!(state.selection.focused_year, 2023);
        let (state, _) = command(state, NavigationCommand::MoveDown);
        let (state, _) = command(state, NavigationCommand::MoveDown);
        assert_eq!(state.selection.focused_year, 2026);
        let (state, _) = command(state, NavigationCommand::MoveUp);
        assert_eq!(state.selection.focused_year, 2023);
    }

    #[test]
    fn test_click_commits_and_notifies_once() {
        let (state, effects) = command(scenario_state(), NavigationCommand::DirectSelect(2018));
        assert_eq!(state.selection, SelectionState::at(2018));
        assert_eq!(effects, vec![GridEffect::YearUpdated { year: 2018 }]);
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let before = scenario_state();
        let (after, effects) = command(before.clone(), NavigationCommand::DirectSelect(2030));
        assert_eq!(after, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_activate_commits_focused_year() {
        let (state, _) = command(scenario_state(), NavigationCommand::MoveLeft);
        let (state, effects) = command(state, NavigationCommand::Activate);
        assert_eq!(state.selection, SelectionState::at(2019));
        assert_eq!(effects, vec![GridEffect::YearUpdated { year: 2019 }]);
    }

    #[test]
    fn test_passthrough_is_a_no_op() {
        let before = scenario_state();
        let (after, effects) = reduce(before.clone(), GridInput::Passthrough);
        assert_eq!(after, before);
        assert!(effects.is_empty());
    }
}

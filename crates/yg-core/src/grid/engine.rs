//! Grid engine implementation

use parking_lot::RwLock;
use tracing::{debug, trace};

use super::{reduce, GridContext, GridEffect, GridInput, GridState};
use crate::bridge::{normalize_input, year_items, GridData, KeyMap, RawInput, YearFormatter, YearItem};
use crate::config::GridConfig;
use crate::date_range::{build_year_list, DateBound};
use crate::events::{typed_handler, Event, EventBus, FocusRequested, YearUpdated};
use crate::Result;

/// Engine state stored internally
#[derive(Debug, Clone)]
struct EngineState {
    grid: GridState,
    /// Date, min and max of the last applied host data
    applied: Option<(DateBound, DateBound, DateBound)>,
    /// Focus/scroll request waiting for the host's next layout pass
    pending_focus: Option<FocusRequested>,
}

/// The main grid engine
///
/// Owns one grid's state, normalizes host input through its [`KeyMap`] and
/// publishes [`YearUpdated`] and [`FocusRequested`] on its event bus.
pub struct GridEngine {
    state: RwLock<EngineState>,
    keymap: KeyMap,
    events: EventBus,
}

impl GridEngine {
    /// Create a new grid engine
    pub fn new(config: &GridConfig) -> Self {
        let state = EngineState {
            grid: GridState::from_config(config),
            applied: None,
            pending_focus: None,
        };

        Self {
            state: RwLock::new(state),
            keymap: config.keymap(),
            events: EventBus::new(),
        }
    }

    /// Render the grid for `data`
    ///
    /// Returns `None` while the host has not supplied a formatter. A change of
    /// date or bounds since the last call resets the selection first.
    pub fn render(&self, data: &GridData) -> Result<Option<Vec<YearItem>>> {
        let Some(formatter) = data.formatter.as_ref() else {
            trace!("Grid not ready: no year formatter");
            return Ok(None);
        };

        if self.state.read().applied != Some(data.key()) {
            self.update_data(data)?;
        }

        Ok(Some(self.items(formatter)))
    }

    /// Apply new host data, resetting the selection to the selected date's year
    ///
    /// An inverted range is rejected and the previous state is kept.
    pub fn update_data(&self, data: &GridData) -> Result<()> {
        let years = build_year_list(data.min, data.max)?;
        {
            let mut state = self.state.write();
            state.applied = Some(data.key());
        }
        self.apply(GridInput::DataUpdate { years, selected: data.date });
        Ok(())
    }

    /// Normalize and apply raw host input
    pub fn dispatch(&self, raw: &RawInput) -> Vec<GridEffect> {
        match normalize_input(raw, &self.keymap) {
            Some(input) => self.apply(input),
            None => Vec::new(),
        }
    }

    /// Apply already-normalized input
    pub fn apply(&self, input: GridInput) -> Vec<GridEffect> {
        let mut state = self.state.write();

        let (grid, effects) = reduce(state.grid.clone(), input);
        state.grid = grid;
        for effect in &effects {
            if let GridEffect::FocusYear { year, move_focus } = *effect {
                state.pending_focus = Some(FocusRequested { year, move_focus });
            }
        }

        drop(state);
        self.publish(&effects);
        effects
    }

    /// View records for the current state
    pub fn items(&self, formatter: &YearFormatter) -> Vec<YearItem> {
        let state = self.state.read();
        year_items(&state.grid.years, &state.grid.selection, formatter)
    }

    /// Get current grid context
    pub fn context(&self) -> GridContext {
        let state = self.state.read();
        GridContext {
            bounds: state.grid.bounds(),
            selection: state.grid.selection,
            columns: state.grid.columns,
        }
    }

    /// Take the pending focus/scroll request
    ///
    /// Hosts call this once their view reflects the latest state. A newer
    /// request replaces one that was never taken.
    pub fn take_pending_focus(&self) -> Option<FocusRequested> {
        self.state.write().pending_focus.take()
    }

    /// Subscribe to events of type `E`
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: Event,
        F: FnMut(&E) + Send + Sync + 'static,
    {
        self.events.subscribe::<E>(typed_handler(handler));
        trace!(
            "Subscribed to {} ({} handlers)",
            std::any::type_name::<E>(),
            self.events.handler_count::<E>()
        );
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    fn publish(&self, effects: &[GridEffect]) {
        for effect in effects {
            debug!("Publishing {:?}", effect);
            match *effect {
                GridEffect::YearUpdated { year } => self.events.publish(YearUpdated { year }),
                GridEffect::FocusYear { year, move_focus } => {
                    self.events.publish(FocusRequested { year, move_focus })
                }
            }
        }
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridError, SelectionState};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn date(s: &str) -> DateBound {
        s.parse().unwrap()
    }

    fn scenario_data() -> GridData {
        GridData::new(date("2020-06-15"), date("2016-01-01"), date("2026-12-31"))
            .with_formatter(Arc::new(|d: DateBound| d.year().to_string()))
    }

    fn recording_engine() -> (GridEngine, Arc<Mutex<Vec<i32>>>) {
        let engine = GridEngine::default();
        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = updates.clone();
        engine.subscribe::<YearUpdated, _>(move |e| sink.lock().push(e.year));
        (engine, updates)
    }

    #[test]
    fn test_render_without_formatter_does_nothing() {
        let (engine, updates) = recording_engine();
        let before = engine.context();
        let data = GridData::new(date("2020-06-15"), date("2016-01-01"), date("2026-12-31"));

        assert!(engine.render(&data).unwrap().is_none());
        assert_eq!(engine.context(), before);
        assert!(engine.take_pending_focus().is_none());
        assert!(updates.lock().is_empty());
    }

    #[test]
    fn test_initial_render() {
        let engine = GridEngine::default();
        let items = engine.render(&scenario_data()).unwrap().unwrap();

        assert_eq!(items.iter().map(|i| i.year).collect::<Vec<_>>(), (2016..=2026).collect::<Vec<_>>());
        assert_eq!(engine.context().selection, SelectionState::at(2020));
        assert_eq!(
            engine.take_pending_focus(),
            Some(FocusRequested { year: 2020, move_focus: false })
        );
        assert!(engine.take_pending_focus().is_none());
    }

    #[test]
    fn test_keyboard_navigation_never_notifies() {
        let (engine, updates) = recording_engine();
        let data = scenario_data();
        engine.render(&data).unwrap();

        for _ in 0..3 {
            engine.dispatch(&RawInput::key_on("ArrowRight", 2020));
        }
        // Re-rendering with unchanged data keeps the keyboard focus
        let items = engine.render(&data).unwrap().unwrap();

        let selection = engine.context().selection;
        assert_eq!(selection.focused_year, 2023);
        assert_eq!(selection.committed_year, 2020);
        assert!(updates.lock().is_empty());
        assert!(items.iter().any(|i| i.year == 2023 && i.is_keyboard_reachable && !i.is_selected));
        assert_eq!(
            engine.take_pending_focus(),
            Some(FocusRequested { year: 2023, move_focus: true })
        );
    }

    #[test]
    fn test_click_emits_exactly_once() {
        let (engine, updates) = recording_engine();
        engine.render(&scenario_data()).unwrap();
        engine.take_pending_focus();

        let effects = engine.dispatch(&RawInput::click_on(2018));

        assert_eq!(effects, vec![GridEffect::YearUpdated { year: 2018 }]);
        assert_eq!(engine.context().selection, SelectionState::at(2018));
        assert_eq!(*updates.lock(), vec![2018]);
        assert!(engine.take_pending_focus().is_none());
    }

    #[test]
    fn test_new_host_date_resets_focus() {
        let engine = GridEngine::default();
        engine.render(&scenario_data()).unwrap();
        engine.dispatch(&RawInput::key_on("ArrowLeft", 2020));
        assert_eq!(engine.context().selection.focused_year, 2019);

        let mut data = scenario_data();
        data.date = date("2024-02-29");
        engine.render(&data).unwrap();
        assert_eq!(engine.context().selection, SelectionState::at(2024));
    }

    #[test]
    fn test_inverted_range_keeps_previous_state() {
        let engine = GridEngine::default();
        engine.render(&scenario_data()).unwrap();
        let before = engine.context();

        let mut data = scenario_data();
        data.min = date("2025-01-01");
        data.max = date("2020-01-01");

        assert!(matches!(engine.render(&data), Err(GridError::InvalidRange { .. })));
        assert_eq!(engine.context(), before);
    }

    #[test]
    fn test_enter_commits_focused_year() {
        let (engine, updates) = recording_engine();
        engine.render(&scenario_data()).unwrap();
        engine.dispatch(&RawInput::key_on("ArrowUp", 2020));
        engine.dispatch(&RawInput::key_on("Enter", 2017));

        assert_eq!(engine.context().selection, SelectionState::at(2017));
        assert_eq!(*updates.lock(), vec![2017]);
    }
}

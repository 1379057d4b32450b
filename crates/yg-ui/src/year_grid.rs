//! Year grid widget
//! Draws the grid engine's year items and feeds egui input back into it

use std::fmt::Display;
use std::sync::Arc;

use egui::{
    Align, Align2, Color32, EventFilter, Id, Response, Rounding, ScrollArea, Sense, Stroke, TextStyle, Ui, Vec2,
    WidgetInfo, WidgetType,
};
use tracing::warn;
use yg_core::{GridData, GridEffect, GridEngine, KeyCode, RawInput, YearItem};

use crate::theme;
use crate::widget_utils::{GridExt, ScrollAreaExt, WidgetId};

/// Keys the grid listens to while one of its buttons has focus
const GRID_KEYS: [egui::Key; 7] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::Tab,
    egui::Key::Enter,
    egui::Key::Space,
];

/// Map an egui key to the grid's key code
pub fn key_code(key: egui::Key) -> KeyCode {
    match key {
        egui::Key::ArrowUp => KeyCode::ArrowUp,
        egui::Key::ArrowDown => KeyCode::ArrowDown,
        egui::Key::ArrowLeft => KeyCode::ArrowLeft,
        egui::Key::ArrowRight => KeyCode::ArrowRight,
        egui::Key::Tab => KeyCode::Tab,
        egui::Key::Enter => KeyCode::Enter,
        egui::Key::Space => KeyCode::Space,
        other => KeyCode::Other(format!("{:?}", other)),
    }
}

/// Year grid styling
#[derive(Debug, Clone)]
pub struct YearGridStyle {
    /// Size of one year button
    pub button_size: Vec2,

    /// Maximum height before the grid scrolls
    pub max_height: f32,

    /// Outline of the keyboard-reachable year
    pub focus_color: Color32,
}

impl Default for YearGridStyle {
    fn default() -> Self {
        Self {
            button_size: Vec2::new(72.0, 32.0),
            max_height: 240.0,
            focus_color: theme::accent_color(),
        }
    }
}

/// Outcome of drawing the grid for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearGridResponse {
    /// Whether the grid had a formatter and was drawn
    pub ready: bool,

    /// Year committed this frame, if any
    pub committed: Option<i32>,

    /// Render error, e.g. an inverted range
    pub error: Option<String>,
}

/// Year grid widget
pub struct YearGridWidget {
    engine: Arc<GridEngine>,
    id: WidgetId,
    style: YearGridStyle,
}

impl YearGridWidget {
    /// Create a new year grid widget
    pub fn new(id: impl Display, engine: Arc<GridEngine>) -> Self {
        Self {
            engine,
            id: WidgetId::new(id),
            style: YearGridStyle::default(),
        }
    }

    /// Set styling
    pub fn with_style(mut self, style: YearGridStyle) -> Self {
        self.style = style;
        self
    }

    pub fn engine(&self) -> &Arc<GridEngine> {
        &self.engine
    }

    /// Show the grid for `data`
    pub fn ui(&mut self, ui: &mut Ui, data: &GridData) -> YearGridResponse {
        let items = match self.engine.render(data) {
            Ok(Some(items)) => items,
            Ok(None) => return YearGridResponse::default(),
            Err(err) => {
                warn!("Cannot render year grid: {}", err);
                ui.colored_label(theme::error_color(), err.to_string());
                return YearGridResponse { error: Some(err.to_string()), ..Default::default() };
            }
        };

        // Items reflect the latest state, so a pending request can be honoured now
        let pending = self.engine.take_pending_focus();
        let columns = self.engine.context().columns;
        // Read from the pointer alone: egui also reports Enter/Space on a focused widget as a click
        let click_pos = ui.input(|i| i.pointer.interact_pos().filter(|_| i.pointer.primary_clicked()));
        let mut inputs = Vec::new();

        ScrollArea::vertical()
            .id_builder(self.id.clone().with("scroll"))
            .max_height(self.style.max_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new_with_id(self.id.clone().with("grid"))
                    .num_columns(columns)
                    .spacing([4.0, 4.0])
                    .show(ui, |ui| {
                        for (idx, item) in items.iter().enumerate() {
                            let response = self.year_button(ui, item);

                            if let Some(request) = pending.filter(|p| p.year == item.year) {
                                response.scroll_to_me(Some(Align::Center));
                                if request.move_focus {
                                    response.request_focus();
                                }
                            }

                            if click_pos.is_some_and(|pos| ui.clip_rect().intersect(response.rect).contains(pos)) {
                                inputs.push(RawInput::click_on(item.year));
                            }

                            if item.is_keyboard_reachable && response.has_focus() {
                                // Arrows belong to the engine; Tab still leaves the grid
                                ui.memory_mut(|m| {
                                    m.set_focus_lock_filter(
                                        response.id,
                                        EventFilter { arrows: true, tab: false, escape: false },
                                    )
                                });
                                ui.input(|i| {
                                    for key in GRID_KEYS {
                                        if i.key_pressed(key) {
                                            inputs.push(RawInput::key_on(key_code(key), item.year));
                                        }
                                    }
                                });
                            }

                            if (idx + 1) % columns == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });

        let mut committed = None;
        for raw in &inputs {
            for effect in self.engine.dispatch(raw) {
                if let GridEffect::YearUpdated { year } = effect {
                    committed = Some(year);
                }
            }
        }
        if !inputs.is_empty() {
            // Focus/scroll requests are applied on the next frame
            ui.ctx().request_repaint();
        }

        YearGridResponse { ready: true, committed, error: None }
    }

    /// Egui id of the button for `year`
    pub fn year_id(&self, year: i32) -> Id {
        self.id.clone().with("year").with(year).id()
    }

    fn year_button(&self, ui: &mut Ui, item: &YearItem) -> Response {
        // Only the reachable year takes part in Tab traversal
        let sense = if item.is_keyboard_reachable { Sense::click() } else { Sense::hover() };
        let (rect, _) = ui.allocate_exact_size(self.style.button_size, Sense::hover());
        let response = ui.interact(rect, self.year_id(item.year), sense);
        response.widget_info(|| {
            WidgetInfo::selected(WidgetType::SelectableLabel, item.is_selected, &item.label)
        });

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, item.is_selected);
            if item.is_selected || response.hovered() || response.has_focus() {
                ui.painter().rect(
                    rect.expand(visuals.expansion),
                    visuals.rounding,
                    visuals.weak_bg_fill,
                    visuals.bg_stroke,
                );
            }
            if item.is_keyboard_reachable && !item.is_selected {
                ui.painter().rect_stroke(rect, Rounding::same(4.0), Stroke::new(1.5, self.style.focus_color));
            }
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                &item.label,
                TextStyle::Button.resolve(ui.style()),
                visuals.text_color(),
            );
        }

        response.on_hover_text(item.year.to_string())
    }
}

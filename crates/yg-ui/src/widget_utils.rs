//! Widget utilities for managing IDs and preventing conflicts
//!
//! Several year grids can live in one window (e.g. a range picker with two
//! grids), so every scroll area and grid gets an id derived from the widget's
//! own base id.

use egui::{Id, ScrollArea, Grid};
use std::fmt::Display;

/// Widget ID builder that ensures unique IDs by combining multiple components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    /// Create a new widget ID builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Extension trait for ScrollArea to easily add unique IDs
pub trait ScrollAreaExt {
    /// Set the ID source using a WidgetId builder
    fn id_builder(self, builder: WidgetId) -> Self;
}

impl ScrollAreaExt for ScrollArea {
    fn id_builder(self, builder: WidgetId) -> Self {
        self.id_source(builder.build())
    }
}

/// Extension trait for Grid to easily add unique IDs
pub trait GridExt {
    /// Create a new grid with a WidgetId builder
    fn new_with_id(builder: WidgetId) -> Self;
}

impl GridExt for Grid {
    fn new_with_id(builder: WidgetId) -> Self {
        Grid::new(builder.build())
    }
}

//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use egui::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yg_core::{resolve_date, DateBound, GridConfig, GridData, GridEngine, YearUpdated};
use yg_ui::{panel_ids, Theme, YearGridWidget};

/// Year selection grid demo
#[derive(Parser, Debug)]
#[command(name = "yeargrid", version, about)]
struct Args {
    /// JSON grid configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initially selected date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<DateBound>,
}

/// Main application state
struct YearGridApp {
    /// Render request handed to the grid every frame
    data: GridData,

    /// The year grid
    year_grid: YearGridWidget,
}

impl YearGridApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &GridConfig, date: Option<DateBound>) -> Self {
        yg_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let engine = Arc::new(GridEngine::new(config));
        engine.subscribe::<YearUpdated, _>(|event| info!("Year updated: {}", event.year));

        let date = clamp_date(resolve_date(date), config.min_date, config.max_date);
        let data = GridData::new(date, config.min_date, config.max_date)
            .with_formatter(Arc::new(|date: DateBound| date.naive().format("%Y").to_string()));

        Self {
            data,
            year_grid: YearGridWidget::new(panel_ids::YEAR_GRID, engine),
        }
    }
}

/// Keep `date` inside `[min, max]`
fn clamp_date(date: DateBound, min: DateBound, max: DateBound) -> DateBound {
    date.max(min).min(max)
}

/// Selected date after `year` was committed: same month and day, within bounds
fn committed_date(data: &GridData, year: i32) -> DateBound {
    clamp_date(data.date.with_year(year), data.min, data.max)
}

impl eframe::App for YearGridApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom(panel_ids::STATUS).show(ctx, |ui| {
            let selection = self.year_grid.engine().context().selection;
            ui.horizontal(|ui| {
                ui.label(format!("Selected: {}", self.data.date));
                if selection.is_navigating() {
                    ui.separator();
                    ui.label(format!("Focused year: {}", selection.focused_year));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Select a year");
            ui.add_space(8.0);

            let response = self.year_grid.ui(ui, &self.data);
            if let Some(year) = response.committed {
                self.data.date = committed_date(&self.data, year);
            }
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GridConfig::load(path)
            .with_context(|| format!("Failed to load grid config from {}", path.display()))?,
        None => GridConfig::default(),
    };

    info!("Starting year grid ({} columns)", config.columns);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([340.0, 380.0])
            .with_min_inner_size([260.0, 200.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    let date = args.date;
    eframe::run_native(
        "Year Grid",
        options,
        Box::new(move |cc| {
            Box::new(YearGridApp::new(cc, &config, date))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateBound {
        s.parse().unwrap()
    }

    #[test]
    fn test_committed_date_keeps_month_and_day() {
        let data = GridData::new(date("2020-06-15"), date("2016-01-01"), date("2026-12-31"));
        assert_eq!(committed_date(&data, 2018), date("2018-06-15"));
    }

    #[test]
    fn test_committed_date_stays_within_bounds() {
        let data = GridData::new(date("2020-01-15"), date("2016-03-01"), date("2026-05-31"));
        assert_eq!(committed_date(&data, 2016), date("2016-03-01"));
        assert_eq!(committed_date(&data, 2026), date("2026-01-15"));

        let data = GridData::new(date("2020-08-15"), date("2016-03-01"), date("2026-05-31"));
        assert_eq!(committed_date(&data, 2026), date("2026-05-31"));
    }
}

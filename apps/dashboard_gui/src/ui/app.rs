use std::time::Instant;

use anyhow::Context;
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use egui::{Color32, RichText, Stroke};
use table_core::{PersonSorter, TablePage};

use crate::config::Settings;
use crate::controller::events::{CounterSlot, UiEvent};
use crate::controller::orchestration::dispatch_ui_event;
use crate::controller::reducer::{self, DashboardState};
use crate::ui::widgets::{counter_widget, person_table, sort_options};

const UI_EVENT_QUEUE: usize = 256;
const TABLE_PAGE_BORDER: Color32 = Color32::from_rgb(239, 68, 68);

pub struct DashboardApp {
    state: DashboardState,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl DashboardApp {
    pub fn new(state: DashboardState) -> Self {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE);
        Self {
            state,
            ui_tx,
            ui_rx,
            status: String::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let people = match &settings.dataset_path {
            Some(path) => dataset::load_people(path)
                .with_context(|| format!("failed to load people from '{}'", path.display()))?,
            None => {
                tracing::info!(
                    rows = settings.sample_size,
                    seed = settings.sample_seed,
                    "no dataset configured, generating sample people"
                );
                dataset::generate_people(settings.sample_size, settings.sample_seed)
            }
        };

        let sorter = match PersonSorter::for_locale(&settings.locale) {
            Ok(sorter) => sorter,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to root collation");
                table_core::TextCollator::root()
                    .map(PersonSorter::new)
                    .context("no collation data available")?
            }
        };

        let table = TablePage::with_field(people, sorter, settings.initial_sort_field);
        Ok(Self::new(DashboardState::new(table)))
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            reducer::apply(&mut self.state, event);
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: Option<UiEvent>) {
        if let Some(event) = event {
            dispatch_ui_event(&self.ui_tx, event, &mut self.status);
            ctx.request_repaint();
        }
    }

    fn show_table_page(&mut self, ui: &mut egui::Ui) {
        let started = Instant::now();
        let mut events = Vec::new();

        egui::Frame::group(ui.style())
            .stroke(Stroke::new(2.0, TABLE_PAGE_BORDER))
            .show(ui, |ui| {
                let table = &mut self.state.table;
                events.push(counter_widget(ui, table.counter(), CounterSlot::Table));
                ui.add_space(12.0);
                events.push(sort_options(ui, table.selector()));
                ui.add_space(12.0);
                person_table(ui, table.sorted_people());
            });

        tracing::debug!(
            render_ms = started.elapsed().as_secs_f64() * 1000.0,
            "table page rendered"
        );

        let ctx = ui.ctx().clone();
        for event in events {
            self.dispatch(&ctx, event);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            let event = counter_widget(ui, &self.state.page_counter, CounterSlot::Page);
            self.dispatch(ctx, event);
            ui.add_space(16.0);

            self.show_table_page(ui);

            if !self.status.is_empty() {
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(&self.status).color(Color32::LIGHT_RED));
                    if ui.button("Dismiss").clicked() {
                        self.status.clear();
                    }
                });
            }
        });
    }
}

//! Stateless widgets. Each one reads core state and reports what the user
//! asked for as a [`UiEvent`]; none of them mutate anything.

use eframe::egui;
use egui::{Color32, RichText};
use shared::domain::Person;
use table_core::{Counter, SortSelector};

use crate::controller::events::{CounterSlot, UiEvent};

const ACCENT: Color32 = Color32::from_rgb(8, 145, 178);
const HEADER_TEXT: Color32 = Color32::from_rgb(34, 211, 238);
const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175);
pub const TABLE_MAX_HEIGHT: f32 = 300.0;

pub fn counter_widget(ui: &mut egui::Ui, counter: &Counter, slot: CounterSlot) -> Option<UiEvent> {
    let mut event = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            if ui.button(RichText::new("-").strong().size(20.0)).clicked() {
                event = Some(UiEvent::Decrement(slot));
            }
            ui.label(RichText::new(counter.value().to_string()).size(32.0).strong());
            if ui.button(RichText::new("+").strong().size(20.0)).clicked() {
                event = Some(UiEvent::Increment(slot));
            }
            if let Some(label) = counter.label() {
                ui.label(RichText::new(label.to_uppercase()).color(MUTED_TEXT));
            }
        });
    });
    event
}

pub fn sort_options(ui: &mut egui::Ui, selector: &SortSelector) -> Option<UiEvent> {
    let mut event = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for option in SortSelector::options() {
                let active = selector.is_active(option.field);
                let text = if active {
                    RichText::new(option.label).strong().color(ACCENT)
                } else {
                    RichText::new(option.label)
                };
                if ui.selectable_label(active, text).clicked() {
                    event = Some(UiEvent::SelectField(option.field));
                }
            }
        });
    });
    event
}

pub fn person_table(ui: &mut egui::Ui, rows: &[Person]) {
    egui::ScrollArea::vertical()
        .id_salt("people_table_scroll")
        .max_height(TABLE_MAX_HEIGHT)
        .show(ui, |ui| {
            egui::Grid::new("people_table")
                .num_columns(SortSelector::options().len())
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for option in SortSelector::options() {
                        ui.label(
                            RichText::new(option.label.to_uppercase())
                                .small()
                                .strong()
                                .color(HEADER_TEXT),
                        );
                    }
                    ui.end_row();

                    for person in rows {
                        ui.label(RichText::new(person.id.to_string()).monospace());
                        ui.label(RichText::new(&person.first_name).strong());
                        ui.label(RichText::new(&person.last_name).strong());
                        ui.label(RichText::new(&person.email).color(MUTED_TEXT));
                        ui.label(RichText::new(&person.phone).color(MUTED_TEXT));
                        ui.end_row();
                    }
                });
        });
}

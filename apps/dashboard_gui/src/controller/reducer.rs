//! Applies queued UI events to the dashboard state.

use table_core::{Counter, TablePage};

use crate::controller::events::{CounterSlot, UiEvent};

pub const PAGE_COUNTER_LABEL: &str = "Page Level Counter";

#[derive(Debug)]
pub struct DashboardState {
    pub page_counter: Counter,
    pub table: TablePage,
}

impl DashboardState {
    pub fn new(table: TablePage) -> Self {
        Self {
            page_counter: Counter::labeled(PAGE_COUNTER_LABEL),
            table,
        }
    }

    fn counter_mut(&mut self, slot: CounterSlot) -> &mut Counter {
        match slot {
            CounterSlot::Page => &mut self.page_counter,
            CounterSlot::Table => self.table.counter_mut(),
        }
    }
}

pub fn apply(state: &mut DashboardState, event: UiEvent) {
    match event {
        UiEvent::Increment(slot) => {
            state.counter_mut(slot).increment();
        }
        UiEvent::Decrement(slot) => {
            state.counter_mut(slot).decrement();
        }
        UiEvent::SelectField(field) => state.table.select_field(field),
    }
}

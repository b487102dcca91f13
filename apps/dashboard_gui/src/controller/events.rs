//! Events raised by dashboard widgets.

use shared::domain::SortField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterSlot {
    Page,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Increment(CounterSlot),
    Decrement(CounterSlot),
    SelectField(SortField),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Increment(_) => "increment",
            UiEvent::Decrement(_) => "decrement",
            UiEvent::SelectField(_) => "select_field",
        }
    }
}

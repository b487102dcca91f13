//! Page-level composition of a counter, a sort selector and the people data.

use shared::domain::{Person, SortField};

use crate::{counter::Counter, selector::SortSelector, sort::PersonSorter};

pub const TABLE_COUNTER_LABEL: &str = "Table Level Counter";

#[derive(Debug)]
struct SortedView {
    field: SortField,
    data_version: u64,
    rows: Vec<Person>,
}

/// Owns the state behind one rendered people table.
///
/// The ordered rows are cached and recomputed only when the selected field
/// or the underlying data changes.
#[derive(Debug)]
pub struct TablePage {
    counter: Counter,
    selector: SortSelector,
    sorter: PersonSorter,
    people: Vec<Person>,
    data_version: u64,
    view: Option<SortedView>,
}

impl TablePage {
    pub fn new(people: Vec<Person>, sorter: PersonSorter) -> Self {
        Self::with_field(people, sorter, SortField::Id)
    }

    pub fn with_field(people: Vec<Person>, sorter: PersonSorter, field: SortField) -> Self {
        Self {
            counter: Counter::labeled(TABLE_COUNTER_LABEL),
            selector: SortSelector::with_field(field),
            sorter,
            people,
            data_version: 0,
            view: None,
        }
    }

    /// Rows in source order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn replace_people(&mut self, people: Vec<Person>) {
        tracing::info!(rows = people.len(), "table data replaced");
        self.people = people;
        self.data_version += 1;
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut Counter {
        &mut self.counter
    }

    pub fn selector(&self) -> &SortSelector {
        &self.selector
    }

    pub fn select_field(&mut self, field: SortField) {
        self.selector.select_field(field);
    }

    pub fn sorter(&self) -> &PersonSorter {
        &self.sorter
    }

    /// Rows ordered by the current field.
    pub fn sorted_people(&mut self) -> &[Person] {
        let field = self.selector.current();
        let stale = match &self.view {
            Some(view) => view.field != field || view.data_version != self.data_version,
            None => true,
        };

        if stale {
            let rows = self.sorter.sort(&self.people, field);
            self.view = Some(SortedView {
                field,
                data_version: self.data_version,
                rows,
            });
        }

        match &self.view {
            Some(view) => &view.rows,
            None => &[],
        }
    }

    /// True when the next `sorted_people` call will re-sort.
    pub fn needs_resort(&self) -> bool {
        match &self.view {
            Some(view) => {
                view.field != self.selector.current() || view.data_version != self.data_version
            }
            None => true,
        }
    }
}

//! Which column the people table is ordered by.

use shared::domain::SortField;

use crate::observable::{Observable, SubscriptionId};

/// A selectable sort field paired with the text shown on its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub field: SortField,
    pub label: &'static str,
}

const SORT_OPTIONS: [SortOption; 5] = [
    SortOption {
        field: SortField::Id,
        label: "ID",
    },
    SortOption {
        field: SortField::FirstName,
        label: "First Name",
    },
    SortOption {
        field: SortField::LastName,
        label: "Last Name",
    },
    SortOption {
        field: SortField::Email,
        label: "Email",
    },
    SortOption {
        field: SortField::Phone,
        label: "Phone",
    },
];

#[derive(Debug, Default)]
pub struct SortSelector {
    current: Observable<SortField>,
}

impl SortSelector {
    pub fn new() -> Self {
        Self::with_field(SortField::Id)
    }

    pub fn with_field(field: SortField) -> Self {
        Self {
            current: Observable::new(field),
        }
    }

    /// Options in display order.
    pub fn options() -> &'static [SortOption] {
        &SORT_OPTIONS
    }

    pub fn current(&self) -> SortField {
        *self.current.get()
    }

    pub fn is_active(&self, field: SortField) -> bool {
        self.current() == field
    }

    pub fn version(&self) -> u64 {
        self.current.version()
    }

    pub fn select_field(&mut self, field: SortField) {
        if self.current.set(field) {
            tracing::debug!(field = %field, "sort field selected");
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SortField) + 'static) -> SubscriptionId {
        self.current.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.current.unsubscribe(id)
    }
}

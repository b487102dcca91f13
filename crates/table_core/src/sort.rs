//! Ordering of person rows by a single attribute.
//!
//! Sorting never touches the caller's slice: a new `Vec` is produced so the
//! source order stays available for the next re-sort. The underlying
//! `sort_by` is stable, so rows with equal keys keep their input order and
//! do not shuffle between renders.

use std::{cmp::Ordering, time::Instant};

use shared::domain::{FieldValue, Person, SortField};

use crate::collation::{CollatorError, TextCollator};

/// Compare two people by `field`.
/// Numbers compare numerically; anything else compares as collated text.
pub fn compare_people(
    a: &Person,
    b: &Person,
    field: SortField,
    collator: &TextCollator,
) -> Ordering {
    match (a.field(field), b.field(field)) {
        (FieldValue::Number(left), FieldValue::Number(right)) => left.cmp(&right),
        (left, right) => collator.compare(&left.to_text(), &right.to_text()),
    }
}

/// Return a copy of `records` ordered ascending by `field`.
pub fn sort_people(records: &[Person], field: SortField, collator: &TextCollator) -> Vec<Person> {
    let started = Instant::now();
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_people(a, b, field, collator));

    tracing::debug!(
        field = %field,
        rows = sorted.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "sorted people"
    );
    sorted
}

/// Sort engine bound to one collation.
#[derive(Debug)]
pub struct PersonSorter {
    collator: TextCollator,
}

impl PersonSorter {
    pub fn new(collator: TextCollator) -> Self {
        Self { collator }
    }

    pub fn for_locale(tag: &str) -> Result<Self, CollatorError> {
        TextCollator::for_locale(tag).map(Self::new)
    }

    pub fn collator(&self) -> &TextCollator {
        &self.collator
    }

    pub fn sort(&self, records: &[Person], field: SortField) -> Vec<Person> {
        sort_people(records, field, &self.collator)
    }

    pub fn compare(&self, a: &Person, b: &Person, field: SortField) -> Ordering {
        compare_people(a, b, field, &self.collator)
    }
}

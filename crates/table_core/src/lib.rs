//! Framework-agnostic state behind the people dashboard: the sort engine,
//! the counter and sort-selector contracts, and the table page that
//! composes them. Presentation layers call in; nothing here renders.

pub mod collation;
pub mod counter;
pub mod observable;
pub mod page;
pub mod selector;
pub mod sort;

pub use collation::{CollatorError, TextCollator};
pub use counter::Counter;
pub use observable::{Observable, SubscriptionId};
pub use page::{TablePage, TABLE_COUNTER_LABEL};
pub use selector::{SortOption, SortSelector};
pub use sort::{compare_people, sort_people, PersonSorter};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

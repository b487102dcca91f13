use std::{cell::RefCell, rc::Rc};

use shared::domain::{Person, PersonId, SortField};

use super::*;

fn sorter() -> PersonSorter {
    PersonSorter::for_locale("en").expect("english collation")
}

fn person(id: i64, first: &str, last: &str) -> Person {
    Person::new(
        id,
        first,
        last,
        format!("{}.{}@example.com", first.to_lowercase(), id),
        format!("555-000-{id:04}"),
    )
}

fn ids(rows: &[Person]) -> Vec<i64> {
    rows.iter().map(|p| p.id.0).collect()
}

#[test]
fn ids_sort_numerically_not_as_text() {
    let rows = vec![person(10, "A", "A"), person(2, "B", "B")];
    assert_eq!(ids(&sorter().sort(&rows, SortField::Id)), vec![2, 10]);
}

#[test]
fn names_follow_collation_rather_than_code_points() {
    let rows = vec![
        person(1, "Ola", "Zephyr"),
        person(2, "Eva", "Ångström"),
        person(3, "Max", "Adams"),
        person(4, "Ivo", "Ångström"),
    ];
    let sorted = sorter().sort(&rows, SortField::LastName);
    let names: Vec<&str> = sorted.iter().map(|p| p.last_name.as_str()).collect();
    assert_eq!(names, vec!["Adams", "Ångström", "Ångström", "Zephyr"]);
    assert_eq!(ids(&sorted), vec![3, 2, 4, 1]);
}

#[test]
fn lowercase_names_are_not_pushed_after_capitals() {
    let rows = vec![person(1, "Carol", "X"), person(2, "bob", "Y")];
    let sorted = sorter().sort(&rows, SortField::FirstName);
    assert_eq!(ids(&sorted), vec![2, 1]);
}

#[test]
fn equal_keys_keep_input_order_for_every_field() {
    let rows = vec![
        Person::new(3, "Sam", "Lee", "same@example.com", "555"),
        Person::new(1, "Sam", "Lee", "same@example.com", "555"),
        Person::new(2, "Sam", "Lee", "same@example.com", "555"),
    ];
    let sorter = sorter();
    for field in [
        SortField::FirstName,
        SortField::LastName,
        SortField::Email,
        SortField::Phone,
    ] {
        assert_eq!(ids(&sorter.sort(&rows, field)), vec![3, 1, 2], "field {field}");
    }
}

#[test]
fn sorting_leaves_the_source_untouched() {
    let rows = vec![person(3, "C", "C"), person(1, "A", "A"), person(2, "B", "B")];
    let snapshot = rows.clone();
    let sorted = sorter().sort(&rows, SortField::FirstName);
    assert_eq!(rows, snapshot);
    assert_eq!(ids(&sorted), vec![1, 2, 3]);
}

#[test]
fn resorting_sorted_rows_is_a_no_op() {
    let rows = dataset::generate_people(60, 9);
    let sorter = sorter();
    for field in SortField::ALL {
        let once = sorter.sort(&rows, field);
        let twice = sorter.sort(&once, field);
        assert_eq!(once, twice, "field {field}");
    }
}

#[test]
fn output_is_a_permutation_of_input() {
    let rows = dataset::generate_people(40, 3);
    let sorter = sorter();
    for field in SortField::ALL {
        let mut got = ids(&sorter.sort(&rows, field));
        got.sort_unstable();
        let mut want = ids(&rows);
        want.sort_unstable();
        assert_eq!(got, want, "field {field}");
    }
}

#[test]
fn empty_input_sorts_to_empty_output() {
    assert!(sorter().sort(&[], SortField::Email).is_empty());
}

#[test]
fn compare_people_reports_numeric_order_for_ids() {
    let sorter = sorter();
    let a = person(9, "A", "A");
    let b = person(11, "A", "A");
    assert_eq!(sorter.compare(&a, &b, SortField::Id), std::cmp::Ordering::Less);
}

#[test]
fn invalid_locale_tag_is_rejected() {
    let err = TextCollator::for_locale("not a locale!").expect_err("bad tag");
    assert!(matches!(err, CollatorError::InvalidLocale { .. }));
}

#[test]
fn root_collation_orders_accented_names() {
    let collator = TextCollator::root().expect("root collation");
    assert_eq!(collator.compare("Ångström", "Zephyr"), std::cmp::Ordering::Less);
    assert_eq!(collator.locale_tag(), "und");
}

#[test]
fn counter_goes_negative_without_clamping() {
    let mut counter = Counter::labeled("Page Level Counter");
    assert_eq!(counter.value(), 0);
    counter.decrement();
    counter.decrement();
    assert_eq!(counter.value(), -2);
    assert_eq!(counter.increment(), -1);
    assert_eq!(counter.label(), Some("Page Level Counter"));
}

#[test]
fn counter_without_label_passes_none_through() {
    let counter = Counter::new(None);
    assert_eq!(counter.label(), None);
}

#[test]
fn counter_notifies_subscribers_on_each_transition() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut counter = Counter::default();
    counter.subscribe(move |value| sink.borrow_mut().push(*value));

    counter.increment();
    counter.increment();
    counter.decrement();

    assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    assert_eq!(counter.version(), 3);
}

#[test]
fn selector_round_trips_the_chosen_field() {
    let mut selector = SortSelector::new();
    assert_eq!(selector.current(), SortField::Id);
    selector.select_field("email".parse().expect("field"));
    assert_eq!(selector.current(), SortField::Email);
    assert_eq!(selector.current().as_str(), "email");
    assert!(selector.is_active(SortField::Email));
    assert!(!selector.is_active(SortField::Id));
}

#[test]
fn selector_lists_five_options_in_display_order() {
    let options: Vec<(SortField, &str)> = SortSelector::options()
        .iter()
        .map(|o| (o.field, o.label))
        .collect();
    assert_eq!(
        options,
        vec![
            (SortField::Id, "ID"),
            (SortField::FirstName, "First Name"),
            (SortField::LastName, "Last Name"),
            (SortField::Email, "Email"),
            (SortField::Phone, "Phone"),
        ]
    );
    for option in SortSelector::options() {
        assert_eq!(option.field.label(), option.label);
    }
}

#[test]
fn observable_skips_notification_when_value_is_unchanged() {
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let mut value = Observable::new(SortField::Id);
    let id = value.subscribe(move |_| *sink.borrow_mut() += 1);

    assert!(!value.set(SortField::Id));
    assert!(value.set(SortField::Phone));
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(value.version(), 1);

    assert!(value.unsubscribe(id));
    assert!(!value.unsubscribe(id));
    value.set(SortField::Email);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn page_resorts_only_when_field_or_data_changes() {
    let rows = vec![person(2, "Bea", "Zed"), person(1, "Cal", "Abe")];
    let mut page = TablePage::new(rows, sorter());
    assert!(page.needs_resort());
    assert_eq!(ids(page.sorted_people()), vec![1, 2]);
    assert!(!page.needs_resort());

    page.counter_mut().increment();
    assert!(!page.needs_resort());

    page.select_field(SortField::FirstName);
    assert!(page.needs_resort());
    assert_eq!(ids(page.sorted_people()), vec![2, 1]);

    page.replace_people(vec![person(5, "Ann", "Q")]);
    assert!(page.needs_resort());
    assert_eq!(ids(page.sorted_people()), vec![5]);
    assert_eq!(page.people()[0].id, PersonId(5));
}

#[test]
fn page_counter_carries_table_label() {
    let page = TablePage::new(Vec::new(), sorter());
    assert_eq!(page.counter().label(), Some(TABLE_COUNTER_LABEL));
    assert_eq!(page.selector().current(), SortField::Id);
}

use super::*;

#[test]
fn parses_camel_case_people_array() {
    let json = r#"[
        {"id": 2, "firstName": "Grace", "lastName": "Hopper", "email": "grace@example.com", "phone": "555-000-0002"},
        {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "phone": "555-000-0001"}
    ]"#;
    let people = parse_people(json).expect("people");
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].id, PersonId(2));
    assert_eq!(people[1].last_name, "Lovelace");
}

#[test]
fn rejects_duplicate_ids() {
    let json = r#"[
        {"id": 1, "firstName": "A", "lastName": "B", "email": "a@b", "phone": "1"},
        {"id": 1, "firstName": "C", "lastName": "D", "email": "c@d", "phone": "2"}
    ]"#;
    let err = parse_people(json).expect_err("duplicate");
    assert!(matches!(err, DatasetError::DuplicateId(PersonId(1))));
}

#[test]
fn rejects_records_missing_fields() {
    let err = parse_people(r#"[{"id": 1, "firstName": "A"}]"#).expect_err("missing fields");
    assert!(matches!(err, DatasetError::Decode(_)));
}

#[test]
fn generator_is_deterministic_per_seed() {
    let a = generate_people(25, 7);
    let b = generate_people(25, 7);
    let c = generate_people(25, 8);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn generator_numbers_ids_from_one() {
    let people = generate_people(10, 1);
    let ids: Vec<i64> = people.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    for person in &people {
        assert!(person.email.contains('@'));
        assert_eq!(person.phone.len(), 12);
    }
}

#[test]
fn email_part_strips_spaces_and_punctuation() {
    assert_eq!(email_part("de la Cruz"), "delacruz");
    assert_eq!(email_part("O'Brien"), "obrien");
}

#[test]
fn missing_file_reports_path() {
    let err = load_people("/definitely/not/here.json").expect_err("missing");
    match err {
        DatasetError::Read { path, .. } => assert!(path.ends_with("here.json")),
        other => panic!("unexpected error: {other}"),
    }
}

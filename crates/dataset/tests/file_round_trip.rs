use dataset::{generate_people, load_people, save_people};

#[test]
fn saved_sample_loads_back_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("people.json");

    let people = generate_people(50, 42);
    save_people(&path, &people).expect("save");
    assert!(path.exists(), "dataset file should exist: {}", path.display());

    let loaded = load_people(&path).expect("load");
    assert_eq!(loaded, people);
}

// End-to-end checks against the sample files in tests/data

use people_report::{
    run_job, Address, HeaderViolation, JobConfig, NameFrequency, PeopleError, Person, PersonStore,
};
use std::fs;
use std::path::PathBuf;

fn test_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn loaded_store() -> PersonStore {
    let mut store = PersonStore::new();
    store.load_from_file(test_data("data.csv")).unwrap();
    store
}

#[test]
fn test_load_people_from_file() {
    let store = loaded_store();

    assert_eq!(store.len(), 8, "Unexpected number of people.");
    assert_eq!(store.people()[0].first_name, "Jimmy");
    assert_eq!(store.people()[7].address.to_string(), "94 Roland St");
}

#[test]
fn test_missing_field_headers() {
    let err = PersonStore::new()
        .load_from_file(test_data("data_NoHeaders.csv"))
        .unwrap_err();

    assert!(matches!(err, PeopleError::MalformedHeader { .. }));
    assert!(err.to_string().contains("does not contain field headers"));
}

#[test]
fn test_invalid_field_headers() {
    let err = PersonStore::new()
        .load_from_file(test_data("data_InvalidHeaders.csv"))
        .unwrap_err();

    assert!(matches!(
        err,
        PeopleError::InvalidHeader {
            violation: HeaderViolation::MissingField("LastName")
        }
    ));
    assert!(err.to_string().contains("unexpected field headers"));
}

#[test]
fn test_create_record_after_load() {
    let store = loaded_store();

    let person = store
        .create_record_from_line("Jimmy,Smith,102 Long Lane,29384857")
        .unwrap();

    assert_eq!(
        person,
        Person {
            first_name: "Jimmy".to_string(),
            last_name: "Smith".to_string(),
            address: Address::parse("102 Long Lane").unwrap(),
            phone_number: "29384857".to_string(),
        }
    );
}

#[test]
fn test_name_frequency_list() {
    let frequencies = loaded_store().name_frequencies();

    assert_eq!(
        frequencies,
        vec![
            NameFrequency::new("Brown", 2),
            NameFrequency::new("Clive", 2),
            NameFrequency::new("Graham", 2),
            NameFrequency::new("Howe", 2),
            NameFrequency::new("James", 2),
            NameFrequency::new("Owen", 2),
            NameFrequency::new("Smith", 2),
            NameFrequency::new("Jimmy", 1),
            NameFrequency::new("John", 1),
        ]
    );
}

#[test]
fn test_ordered_address_list() {
    let addresses: Vec<String> = loaded_store()
        .ordered_addresses()
        .iter()
        .map(|a| a.to_string())
        .collect();

    assert_eq!(
        addresses,
        vec![
            "65 Ambling Way",
            "8 Crimson Rd",
            "12 Howard St",
            "102 Long Lane",
            "94 Roland St",
            "78 Short Lane",
            "82 Stewart St",
            "49 Sutherland St",
        ]
    );
}

#[test]
fn test_output_reports_overwrite_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let frequency_path = dir.path().join("name_frequencies.csv");
    let address_path = dir.path().join("ordered_addresses.csv");
    fs::write(&frequency_path, "old\n").unwrap();
    fs::write(&address_path, "old\n").unwrap();

    let store = loaded_store();
    store.write_name_frequencies(&frequency_path).unwrap();
    store.write_ordered_addresses(&address_path).unwrap();

    let frequencies = fs::read_to_string(&frequency_path).unwrap();
    let lines: Vec<&str> = frequencies.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines.first(), Some(&"Brown, 2"));
    assert_eq!(lines.last(), Some(&"John, 1"));

    let addresses = fs::read_to_string(&address_path).unwrap();
    let lines: Vec<&str> = addresses.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines.first(), Some(&"65 Ambling Way"));
    assert_eq!(lines.last(), Some(&"49 Sutherland St"));
}

#[test]
fn test_run_job_writes_both_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config = JobConfig::with_output_dir(test_data("data.csv"), dir.path());

    let summary = run_job(&config).unwrap();

    assert_eq!(summary.people, 8);
    assert_eq!(summary.distinct_names, 9);
    assert_eq!(summary.addresses, 8);
    assert!(config.name_frequency_output.is_file());
    assert!(config.ordered_address_output.is_file());
}

use satman::api::SatApi;
use satman::model::NewCandidate;
use satman::store::fs_backend::FsBackend;
use satman::store::persist::LoadEvent;
use std::fs;
use std::path::Path;

fn candidate(name: &str, score: i64) -> NewCandidate {
    NewCandidate::new(name, "123 Oak St", "Boston", "USA", "02101", score)
}

fn leftover_staging_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".tmp"))
        .collect()
}

#[test]
fn records_survive_a_reopen_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sat_data.json");

    {
        let (mut api, _) = SatApi::open(FsBackend::new(&path), 1600.0).unwrap();
        api.insert(candidate("Carl", 400)).unwrap();
        api.insert(candidate("Alice", 1350)).unwrap();
        api.insert(candidate("Bob", 1200)).unwrap();
        api.update_score("Bob", 1210).unwrap();
    }

    let (api, messages) = SatApi::open(FsBackend::new(&path), 1600.0).unwrap();
    assert_eq!(api.load_event(), &LoadEvent::Loaded);
    assert!(messages.messages.is_empty());

    let names: Vec<_> = api
        .roster()
        .list_all()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Carl", "Alice", "Bob"]);
    assert_eq!(api.roster().get("Bob").unwrap().sat_score, 1210);
    assert!(!api.roster().get("Carl").unwrap().passed);
}

#[test]
fn saved_file_is_keyed_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sat_data.json");

    let (mut api, _) = SatApi::open(FsBackend::new(&path), 1600.0).unwrap();
    api.insert(candidate("Alice", 1350)).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value["max_score"], 1600.0);
    assert_eq!(value["records"]["Alice"]["sat_score"], 1350);
    assert_eq!(value["records"]["Alice"]["passed"], true);
    assert!(leftover_staging_files(dir.path()).is_empty());
}

#[test]
fn corrupt_file_is_backed_up_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sat_data.json");
    let garbage = b"{\"max_score\": 1600, \"records\": {".to_vec();
    fs::write(&path, &garbage).unwrap();

    let (api, opened) = SatApi::open(FsBackend::new(&path), 1600.0).unwrap();

    assert!(matches!(api.load_event(), LoadEvent::Recovered { .. }));
    assert!(api.roster().is_empty());
    assert_eq!(opened.messages.len(), 1);

    let backup = dir.path().join("sat_data.json.backup");
    assert_eq!(fs::read(backup).unwrap(), garbage);
}

#[test]
fn bad_records_are_dropped_and_the_rest_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sat_data.json");
    let data = r#"{
        "max_score": 1600,
        "records": {
            "Alice": {"name": "Alice", "address": "a", "city": "b", "country": "c",
                      "pincode": "02101", "sat_score": 1350, "passed": true},
            "Eve": {"name": "Eve", "address": "a", "city": "b", "country": "c",
                    "pincode": "02101", "sat_score": 9999, "passed": true}
        }
    }"#;
    fs::write(&path, data).unwrap();

    let (api, opened) = SatApi::open(FsBackend::new(&path), 1600.0).unwrap();

    assert_eq!(api.load_event(), &LoadEvent::Loaded);
    assert_eq!(api.roster().len(), 1);
    assert!(api.roster().contains("Alice"));
    assert_eq!(opened.messages.len(), 1);
    assert!(opened.messages[0].content.contains("Eve"));
}

#[test]
fn failed_rename_keeps_memory_and_leaves_no_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sat_data.json");
    let (mut api, _) = SatApi::open(FsBackend::new(&path), 1600.0).unwrap();

    // A non-empty directory at the target path makes the rename fail
    fs::create_dir(&path).unwrap();
    fs::write(path.join("blocker"), b"x").unwrap();

    let err = api.insert(candidate("Alice", 1350)).unwrap_err();
    assert!(err.is_persistence());
    assert!(api.roster().is_empty());
    assert!(leftover_staging_files(dir.path()).is_empty());
}

#[test]
fn recomputed_flags_are_written_back_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sat_data.json");
    let data = r#"{"max_score": 1600, "records": {
        "Carl": {"name": "Carl", "address": "a", "city": "b", "country": "c",
                 "pincode": "02101", "sat_score": 400, "passed": true}
    }}"#;
    fs::write(&path, data).unwrap();

    let (_, first) = SatApi::open(FsBackend::new(&path), 1600.0).unwrap();
    assert_eq!(first.messages.len(), 1);

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value["records"]["Carl"]["passed"], false);

    let (_, second) = SatApi::open(FsBackend::new(&path), 1600.0).unwrap();
    assert!(second.messages.is_empty());
}

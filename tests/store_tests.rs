//! Behavioral tests for the date-indexed store over a real data directory

use chronolog::domain::{DateKey, DiaryEntry};
use chronolog::infrastructure::store::STORAGE_KEY;
use chronolog::infrastructure::{DiaryStore, FileBlobStore};
use std::fs;
use tempfile::TempDir;

fn entry(id: &str, key: &str, year: i32, content: &str) -> DiaryEntry {
    DiaryEntry {
        id: id.to_string(),
        date_key: DateKey::from(key),
        year,
        content: content.to_string(),
        mood: None,
        last_edited: 1,
    }
}

fn file_store(temp: &TempDir) -> DiaryStore<FileBlobStore> {
    DiaryStore::new(FileBlobStore::new(temp.path().to_path_buf()))
}

#[test]
fn test_uniqueness_last_write_wins() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);

    store.save_entry(&entry("first", "05-05", 2020, "one"));
    store.save_entry(&entry("second", "05-05", 2020, "two"));
    store.save_entry(&entry("third", "05-05", 2020, "three"));

    let day = store.get_entries_for_day(5, 5);
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].id, "third");
    assert_eq!(day[0].content, "three");
}

#[test]
fn test_round_trip_deep_equal() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);
    let mut e = entry("rt", "11-30", 2018, "multi\nline\ncontent");
    e.mood = Some("🌧️".to_string());
    e.last_edited = 1_600_000_000_123;

    store.save_entry(&e);

    assert_eq!(store.get_entry(11, 30, 2018), Some(e));
}

#[test]
fn test_day_ordering() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);
    for year in [2021, 2023, 2020] {
        store.save_entry(&entry(&year.to_string(), "01-15", year, ""));
    }

    let years: Vec<i32> = store
        .get_entries_for_day(1, 15)
        .iter()
        .map(|e| e.year)
        .collect();
    assert_eq!(years, vec![2023, 2021, 2020]);
}

#[test]
fn test_month_aggregation() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);
    store.save_entry(&entry("a", "03-05", 2019, ""));
    store.save_entry(&entry("b", "03-05", 2020, ""));
    store.save_entry(&entry("c", "03-12", 2021, ""));
    store.save_entry(&entry("d", "04-05", 2021, ""));

    let counts = store.get_entry_counts_for_month(3);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&5), Some(&2));
    assert_eq!(counts.get(&12), Some(&1));
}

#[test]
fn test_delete_idempotence() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);
    store.save_entry(&entry("a", "08-08", 2020, "x"));
    store.save_entry(&entry("b", "08-08", 2021, "y"));

    store.delete_entry(8, 8, 2020);
    let after_first = fs::read_to_string(temp.path().join(format!("{}.json", STORAGE_KEY))).unwrap();
    store.delete_entry(8, 8, 2020);
    let after_second =
        fs::read_to_string(temp.path().join(format!("{}.json", STORAGE_KEY))).unwrap();

    assert_eq!(after_first, after_second);
    let day = store.get_entries_for_day(8, 8);
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].id, "b");
}

#[test]
fn test_corrupted_blob_resilience() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);
    store.save_entry(&entry("a", "07-04", 2022, "Beach day"));

    fs::write(
        temp.path().join(format!("{}.json", STORAGE_KEY)),
        "\u{0}\u{1}garbage",
    )
    .unwrap();

    assert!(store.get_entries_for_day(7, 4).is_empty());
    assert_eq!(store.get_entry(7, 4, 2022), None);
    assert!(store.get_entry_counts_for_month(7).is_empty());

    store.save_entry(&entry("b", "07-04", 2019, "Rainy indoors"));
    let day = store.get_entries_for_day(7, 4);
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].id, "b");
}

#[test]
fn test_reads_existing_blob_layout() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(format!("{}.json", STORAGE_KEY)),
        r#"{"07-04":{"2022":{"id":"a","dayMonth":"07-04","year":2022,"content":"Beach day","mood":"☀️","lastEdited":1700000000000}},"07-05":{}}"#,
    )
    .unwrap();
    let store = file_store(&temp);

    let e = store.get_entry(7, 4, 2022).unwrap();
    assert_eq!(e.id, "a");
    assert_eq!(e.mood.as_deref(), Some("☀️"));
    assert_eq!(store.get_entry_counts_for_month(7).len(), 1);
}

#[test]
fn test_same_day_scenario() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);

    let mut a = entry("a", "07-04", 2022, "Beach day");
    a.mood = Some("☀️".to_string());
    let b = entry("b", "07-04", 2019, "Rainy indoors");

    store.save_entry(&a);
    store.save_entry(&b);

    assert_eq!(store.get_entries_for_day(7, 4), vec![a, b]);
}

#[test]
fn test_unreadable_file_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(format!("{}.json", STORAGE_KEY));
    fs::write(&path, [0xff, 0xfe, 0x7b, 0x7d]).unwrap();
    let store = file_store(&temp);

    assert!(store.get_entries_for_day(7, 4).is_empty());
    assert!(store.get_entry_counts_for_month(7).is_empty());

    store.save_entry(&entry("a", "07-04", 2022, "Beach day"));
    assert_eq!(store.get_entry(7, 4, 2022).unwrap().id, "a");
}

#[test]
fn test_mistyped_record_keeps_the_rest_on_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(format!("{}.json", STORAGE_KEY));
    fs::write(
        &path,
        r#"{"07-04":{"2022":{"id":"a","dayMonth":"07-04","year":2022,"content":"Beach day","lastEdited":1}},"01-01":{"2020":{"id":"b","dayMonth":"01-01","year":"2020"}}}"#,
    )
    .unwrap();
    let store = file_store(&temp);

    store.save_entry(&entry("c", "03-03", 2021, "later"));

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains(r#""07-04":{"2022":"#));
    assert_eq!(store.get_entries_for_day(7, 4).len(), 1);
    assert_eq!(store.get_entry(3, 3, 2021).unwrap().id, "c");
}

//! Library-level persistence tests: a catalog backed by a `FileStore` must
//! survive process restarts, simulated here by reloading from the same
//! directory.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use shumi::model::catalog::{Catalog, UNCATEGORIZED};
use shumi::model::item::{HobbyItem, HobbyStatus};
use shumi::model::seed::SeedCatalog;
use shumi::store::FileStore;

fn seed() -> SeedCatalog {
    SeedCatalog::from_json(
        r#"{
          "hobbies": [
            {"category": "ゲーム", "items": ["将棋", "囲碁"]},
            {"category": "音楽", "items": ["ギター", "ピアノ"]}
          ]
        }"#,
    )
    .unwrap()
}

fn open(dir: &Path) -> Catalog {
    Catalog::load(seed(), Box::new(FileStore::new(dir)))
}

#[test]
fn status_survives_reload() {
    let tmp = TempDir::new().unwrap();

    let mut catalog = open(tmp.path());
    catalog.set_status("将棋", HobbyStatus::Done).unwrap();
    catalog.set_status("ギター", HobbyStatus::InProgress).unwrap();
    drop(catalog);

    let reloaded = open(tmp.path());
    assert_eq!(reloaded.status_of("将棋"), HobbyStatus::Done);
    assert_eq!(reloaded.status_of("ギター"), HobbyStatus::InProgress);
    assert_eq!(reloaded.status_of("囲碁"), HobbyStatus::NotStarted);
}

#[test]
fn custom_item_survives_reload() {
    let tmp = TempDir::new().unwrap();

    let mut catalog = open(tmp.path());
    catalog
        .add_item("チェス", "ゲーム", HobbyStatus::NotStarted)
        .unwrap();
    catalog
        .add_item("キャンプ", "アウトドア", HobbyStatus::NotStarted)
        .unwrap();
    drop(catalog);

    let reloaded = open(tmp.path());
    assert_eq!(
        reloaded.items_in("ゲーム").unwrap(),
        ["チェス", "囲碁", "将棋"]
    );
    assert_eq!(reloaded.items_in("アウトドア").unwrap(), ["キャンプ"]);
    let names: Vec<&str> = reloaded.categories().keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["アウトドア", "ゲーム", "音楽"]);
}

#[test]
fn add_with_status_needs_a_status_write_to_survive() {
    // Adding persists the custom universe; the status document is written by
    // status changes. A later set_status on any item captures the add's
    // status too, because the whole non-default set is rewritten.
    let tmp = TempDir::new().unwrap();

    let mut catalog = open(tmp.path());
    catalog.add_item("チェス", "ゲーム", HobbyStatus::Done).unwrap();
    catalog.set_status("囲碁", HobbyStatus::InProgress).unwrap();
    drop(catalog);

    let reloaded = open(tmp.path());
    assert_eq!(reloaded.status_of("チェス"), HobbyStatus::Done);
    assert_eq!(reloaded.status_of("囲碁"), HobbyStatus::InProgress);
}

#[test]
fn import_then_persist_keeps_custom_universe() {
    let tmp = TempDir::new().unwrap();

    let mut catalog = open(tmp.path());
    catalog.import_items(vec![
        HobbyItem::new("将棋", HobbyStatus::Done),
        HobbyItem::new("ボルダリング", HobbyStatus::InProgress),
    ]);
    catalog.persist().unwrap();
    drop(catalog);

    let reloaded = open(tmp.path());
    assert_eq!(reloaded.status_of("将棋"), HobbyStatus::Done);
    assert_eq!(reloaded.status_of("ボルダリング"), HobbyStatus::InProgress);
    assert_eq!(
        reloaded.owning_category("ボルダリング"),
        Some(UNCATEGORIZED)
    );
}

#[test]
fn reset_clears_files_and_restores_seed() {
    let tmp = TempDir::new().unwrap();

    let mut catalog = open(tmp.path());
    catalog.add_item("チェス", "ゲーム", HobbyStatus::Done).unwrap();
    catalog.set_status("将棋", HobbyStatus::Done).unwrap();
    catalog.reset().unwrap();
    drop(catalog);

    assert!(!tmp.path().join("completedHobbies.json").exists());
    assert!(!tmp.path().join("customHobbies.json").exists());

    let reloaded = open(tmp.path());
    assert!(!reloaded.contains_item("チェス"));
    assert!(
        reloaded
            .export_items()
            .iter()
            .all(|i| i.status == HobbyStatus::NotStarted)
    );
}

#[test]
fn corrupted_files_fall_back_to_seed() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("completedHobbies.json"), "not json {{{").unwrap();
    fs::write(tmp.path().join("customHobbies.json"), "\u{0000}\u{0001}").unwrap();

    let catalog = open(tmp.path());
    assert_eq!(catalog.categories().len(), 2);
    assert!(
        catalog
            .export_items()
            .iter()
            .all(|i| i.status == HobbyStatus::NotStarted)
    );
}

#[test]
fn export_document_round_trips_through_json() {
    let tmp = TempDir::new().unwrap();

    let mut catalog = open(tmp.path());
    catalog.set_status("将棋", HobbyStatus::Done).unwrap();
    catalog.set_status("ピアノ", HobbyStatus::InProgress).unwrap();

    let exported = catalog.export_items();
    let text = serde_json::to_string_pretty(&exported).unwrap();
    let parsed: Vec<HobbyItem> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, exported);

    let tmp2 = TempDir::new().unwrap();
    let mut other = open(tmp2.path());
    other.import_items(parsed);
    assert_eq!(other.export_items(), exported);
}

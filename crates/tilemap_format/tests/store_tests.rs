//! MapStore 与按扩展名读写。

use std::path::Path;

use tilemap_core::{CoreError, GridStore};
use tilemap_format::{read_map_file, write_map_file, MapFile, MapFormat, MapStore};

fn map_with(tile: i32) -> MapFile {
    let mut grid = GridStore::new(10, 10);
    grid.set(4, 6, tile).unwrap();
    MapFile::new(grid, 32, 32)
}

#[test]
fn save_then_load_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = MapStore::new(dir.path().join("maps"));

    let path = store.save("level_1", &map_with(3)).unwrap();
    assert_eq!(path.file_name().unwrap(), "level_1.map");
    assert!(store.exists("level_1"));

    let loaded = store.load("level_1").unwrap();
    assert_eq!(loaded.grid.get(4, 6).unwrap(), 3);
}

#[test]
fn save_overwrites_existing_map() {
    let dir = tempfile::tempdir().unwrap();
    let store = MapStore::new(dir.path());
    store.save("a", &map_with(1)).unwrap();
    store.save("a", &map_with(9)).unwrap();
    assert_eq!(store.load("a").unwrap().grid.get(4, 6).unwrap(), 9);
}

#[test]
fn list_is_sorted_and_ignores_other_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = MapStore::new(dir.path());
    store.save("zeta", &map_with(1)).unwrap();
    store.save("alpha", &map_with(1)).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
    std::fs::create_dir(dir.path().join("sub.map")).unwrap();

    assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
}

#[test]
fn list_of_missing_dir_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = MapStore::new(dir.path().join("nope"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn invalid_names_never_touch_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = MapStore::new(dir.path());
    assert!(matches!(
        store.save("../escape", &map_with(1)),
        Err(CoreError::InvalidMapName(_))
    ));
    assert!(matches!(store.load(""), Err(CoreError::InvalidMapName(_))));
    assert!(!dir.path().parent().unwrap().join("escape.map").exists());
}

#[test]
fn missing_map_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = MapStore::new(dir.path());
    assert!(matches!(store.load("ghost"), Err(CoreError::Io(_))));
}

#[test]
fn corrupt_file_reports_corrupt_data() {
    let dir = tempfile::tempdir().unwrap();
    let store = MapStore::new(dir.path());
    std::fs::write(dir.path().join("broken.map"), [1u8, 2, 3]).unwrap();
    assert!(matches!(
        store.load("broken"),
        Err(CoreError::CorruptData { .. })
    ));
}

#[test]
fn export_format_follows_extension() {
    assert_eq!(MapFormat::from_path(Path::new("a/b.ron")), MapFormat::Ron);
    assert_eq!(MapFormat::from_path(Path::new("b.RON")), MapFormat::Ron);
    assert_eq!(MapFormat::from_path(Path::new("b.map")), MapFormat::Binary);
    assert_eq!(MapFormat::from_path(Path::new("b")), MapFormat::Binary);

    let dir = tempfile::tempdir().unwrap();
    let map = map_with(5);

    let ron_path = dir.path().join("out/exported.ron");
    write_map_file(&ron_path, &map).unwrap();
    let text = std::fs::read_to_string(&ron_path).unwrap();
    assert!(text.contains("tiles"));
    assert_eq!(read_map_file(&ron_path).unwrap(), map);

    let bin_path = dir.path().join("exported.map");
    write_map_file(&bin_path, &map).unwrap();
    assert_eq!(read_map_file(&bin_path).unwrap(), map);
}

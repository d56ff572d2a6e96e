//! Integration tests for loading a catalog from disk

use std::io::Write;
use tapedeck_catalog::{Catalog, CatalogError, SearchHit};
use tempfile::NamedTempFile;

// ===== Test Helpers =====

fn write_library(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write library");
    file
}

const LIBRARY: &str = r#"[
    {
        "Name": "Kind of Blue",
        "Artist": "Miles Davis",
        "Genre": "Jazz",
        "Songs": [
            { "Name": "So What", "Duration": "09:22" },
            { "Name": "Freddie Freeloader", "Duration": "09:46" },
            { "Name": "Blue in Green", "Duration": "05:37" }
        ]
    },
    {
        "name": "Discipline",
        "artist": "King Crimson",
        "genre": "Progressive Rock",
        "songs": [
            { "name": "Elephant Talk", "duration": "04:43" },
            { "name": "Indiscipline", "duration": "04:33" }
        ]
    }
]"#;

// ===== Loading =====

#[test]
fn load_library_file_in_order() {
    let file = write_library(LIBRARY);

    let catalog = Catalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.song_count(), 5);
    assert_eq!(catalog.get_by_index(0).unwrap().name, "Kind of Blue");
    assert_eq!(catalog.get_by_index(1).unwrap().artist, "King Crimson");

    let songs: Vec<&str> = catalog.get_by_index(0).unwrap()
        .songs
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(songs, vec!["So What", "Freddie Freeloader", "Blue in Green"]);
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("AlbumList.json");

    let err = Catalog::load(&path).unwrap_err();

    assert!(err.is_load_error());
    assert!(matches!(err, CatalogError::Read { .. }));
    assert!(err.to_string().contains("AlbumList.json"));
}

#[test]
fn malformed_file_is_a_load_error() {
    let file = write_library(r#"[{"name": "Truncated", "songs": ["#);

    let err = Catalog::load(file.path()).unwrap_err();

    assert!(err.is_load_error());
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn caller_can_fall_back_to_empty_catalog() {
    let file = write_library("not json");

    let catalog = Catalog::load(file.path()).unwrap_or_else(|_| Catalog::empty());

    assert!(catalog.is_empty());
    assert!(catalog.get_by_index(0).is_err());
}

#[test]
fn empty_array_loads_as_empty_catalog() {
    let file = write_library("[]");
    let catalog = Catalog::load(file.path()).unwrap();
    assert!(catalog.is_empty());
}

// ===== Search over loaded data =====

#[test]
fn search_loaded_library() {
    let file = write_library(LIBRARY);
    let catalog = Catalog::load(file.path()).unwrap();

    let hits = catalog.search("disc").unwrap();

    // "Discipline" album, then "Indiscipline" song
    assert_eq!(hits.len(), 2);
    assert!(matches!(hits[0], SearchHit::Album { album_index: 1, .. }));
    assert!(matches!(
        hits[1],
        SearchHit::Song {
            album_index: 1,
            song_index: 1,
            ..
        }
    ));
}

#[test]
fn search_is_case_insensitive() {
    let file = write_library(LIBRARY);
    let catalog = Catalog::load(file.path()).unwrap();

    let lower = catalog.search("blue").unwrap().len();
    let upper = catalog.search("BLUE").unwrap().len();

    // "Kind of Blue" album and "Blue in Green" song
    assert_eq!(lower, 2);
    assert_eq!(lower, upper);
}

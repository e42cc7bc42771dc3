use seabattle::{append_entry, load_entries, ScoreEntry};
use std::fs;
use std::path::PathBuf;

fn temp_store(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("seabattle_{}_{}.txt", tag, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn append_then_load_sorts_descending() {
    let path = temp_store("sort");
    append_entry(&path, "alice", 120).unwrap();
    append_entry(&path, "bob", 250).unwrap();
    append_entry(&path, "carol", 180).unwrap();

    let entries = load_entries(&path);
    assert_eq!(
        entries,
        vec![
            ScoreEntry { name: "bob".into(), score: 250 },
            ScoreEntry { name: "carol".into(), score: 180 },
            ScoreEntry { name: "alice".into(), score: 120 },
        ]
    );
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_loads_as_empty() {
    let path = temp_store("missing");
    assert!(load_entries(&path).is_empty());
}

#[test]
fn names_keep_embedded_spaces() {
    let path = temp_store("spaces");
    append_entry(&path, "Grace H", 200).unwrap();

    let entries = load_entries(&path);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Grace H");
    assert_eq!(entries[0].score, 200);
    let _ = fs::remove_file(&path);
}

#[test]
fn malformed_lines_are_skipped() {
    let path = temp_store("malformed");
    fs::write(&path, "alice 120\nnot-a-line\n 42\nbob abc\ncarol -5\n\n").unwrap();

    let entries = load_entries(&path);
    assert_eq!(
        entries,
        vec![
            ScoreEntry { name: "alice".into(), score: 120 },
            ScoreEntry { name: "carol".into(), score: -5 },
        ]
    );
    let _ = fs::remove_file(&path);
}

#[test]
fn negative_scores_survive_the_round_trip() {
    let path = temp_store("negative");
    append_entry(&path, "dave", -30).unwrap();
    append_entry(&path, "erin", 10).unwrap();

    let entries = load_entries(&path);
    assert_eq!(entries[0].score, 10);
    assert_eq!(entries[1].score, -30);
    let _ = fs::remove_file(&path);
}

use super::*;
use crate::domain::{NoteRecord, StoredNote};
use crate::infra::Fingerprint;
use crate::store::NoteRepository;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_note(content: &str) -> StoredNote {
    let ts = "2024-01-16T09:00:00Z".parse().unwrap();
    StoredNote {
        id: 7,
        title: "Trip".to_string(),
        content: content.to_string(),
        author: "Ada".to_string(),
        created_at: ts,
        updated_at: ts,
        tags: vec!["Travel".to_string()],
    }
}

// ===========================================
// truncate_str
// ===========================================

#[test]
fn truncate_str_short_input_unchanged() {
    assert_eq!(truncate_str("Trip", 10), "Trip");
}

#[test]
fn truncate_str_exact_width_unchanged() {
    assert_eq!(truncate_str("abcde", 5), "abcde");
}

#[test]
fn truncate_str_adds_ellipsis() {
    assert_eq!(truncate_str("abcdefgh", 5), "abcd…");
}

#[test]
fn truncate_str_counts_chars_not_bytes() {
    assert_eq!(truncate_str("été été", 4), "été…");
}

// ===========================================
// note_detail
// ===========================================

#[test]
fn note_detail_renders_markup_by_default() {
    let note = sample_note("<en-note><div>Pack passport</div></en-note>");
    let detail = show::note_detail(note, false);
    assert_eq!(detail.content, "Pack passport");
    assert_eq!(detail.id, 7);
    assert_eq!(detail.tags, vec!["Travel"]);
}

#[test]
fn note_detail_raw_keeps_markup() {
    let markup = "<en-note><div>Pack passport</div></en-note>";
    let detail = show::note_detail(sample_note(markup), true);
    assert_eq!(detail.content, markup);
}

// ===========================================
// Store file handling
// ===========================================

#[test]
fn open_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir.path().join("absent.hoard")).unwrap();
    assert!(store.query_all().unwrap().is_empty());
}

#[test]
fn save_then_open_preserves_notes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("notes.hoard");

    let mut store = NoteStore::new().unwrap();
    store
        .ingest(
            &Fingerprint::compute(b"doc"),
            "doc.enex",
            &[NoteRecord::new("Trip").tags(["Travel"])],
        )
        .unwrap();
    save_store(&store, &path).unwrap();

    let reopened = open_store(&path).unwrap();
    assert_eq!(reopened.query_all().unwrap(), store.query_all().unwrap());
    assert!(reopened.has_ingested(&Fingerprint::compute(b"doc")).unwrap());
}

#[test]
fn open_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.hoard");
    std::fs::write(&path, b"not a snapshot").unwrap();

    let err = open_store(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load store"));
}

// Integration tests for the editor host.
//
// These exercise full edit/save/undo/open workflows against real files,
// checking the modified state a window title would display.

use plotpad_config::HistorySettings;
use plotpad_core::{Editor, SharedDocument, TextDelta, TextDocument};
use plotpad_mod_history::{ChangeCount, ChangeTracker, EditBatch};

fn settings() -> HistorySettings {
    HistorySettings {
        group_timeout_ms: 0, // every edit is its own undo step
        ..HistorySettings::default()
    }
}

// ── Save / open ────────────────────────────────────────────────────────

#[test]
fn test_save_marks_clean_and_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sketch.py");

    let mut editor = Editor::new(&settings());
    editor.insert(0, "size(200, 200)\n").unwrap();
    assert!(editor.is_modified());

    editor.save_to(&path).unwrap();
    assert!(!editor.is_modified());
    assert!(editor.can_undo());
    assert_eq!(editor.file_path(), Some(path.as_path()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "size(200, 200)\n");
}

#[test]
fn test_edit_then_undo_back_to_saved_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sketch.py");

    let mut editor = Editor::new(&settings());
    editor.insert(0, "rect(0, 0, 10, 10)").unwrap();
    editor.save_to(&path).unwrap();

    editor.insert(18, "\noval(5, 5, 3, 3)").unwrap();
    editor.remove(0, 4).unwrap();
    assert!(editor.is_modified());

    editor.undo();
    editor.undo();
    assert!(!editor.is_modified());
    assert_eq!(editor.text(), "rect(0, 0, 10, 10)");

    editor.redo();
    assert!(editor.is_modified());
}

#[test]
fn test_undo_past_save_then_type_requires_new_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sketch.py");

    let mut editor = Editor::new(&settings());
    editor.insert(0, "A").unwrap();
    editor.insert(1, "B").unwrap();
    editor.save_to(&path).unwrap();

    editor.undo();
    assert_eq!(editor.change_count(), ChangeCount::Unrecoverable);
    editor.insert(1, "C").unwrap();
    assert!(!editor.can_redo());

    while editor.can_undo() {
        editor.undo();
    }
    while editor.can_redo() {
        editor.redo();
    }
    assert!(editor.is_modified());
    assert_eq!(editor.text(), "AC");

    editor.save().unwrap();
    assert!(!editor.is_modified());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "AC");
}

#[test]
fn test_save_without_mark_clean_notification_reads_unmodified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sketch.py");

    let mut editor = Editor::new(&HistorySettings {
        notify_on_mark_clean: false,
        ..settings()
    });
    editor.insert(0, "x").unwrap();
    editor.save_to(&path).unwrap();

    assert!(editor.history().is_clean());
    assert!(!editor.is_modified());

    editor.insert(1, "y").unwrap();
    assert!(editor.is_modified());
}

#[test]
fn test_undo_past_save_then_redo_stays_modified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sketch.py");

    let mut editor = Editor::new(&settings());
    editor.insert(0, "saved").unwrap();
    editor.save_to(&path).unwrap();

    editor.undo();
    editor.redo();
    // Same text as the file, but the history cannot prove it.
    assert_eq!(editor.text(), "saved");
    assert_eq!(editor.change_count(), ChangeCount::Unrecoverable);
    assert!(editor.is_modified());
}

#[test]
fn test_open_replaces_document_and_history() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.py");
    let second = dir.path().join("second.py");
    std::fs::write(&first, "first").unwrap();
    std::fs::write(&second, "second").unwrap();

    let mut editor = Editor::new(&settings());
    editor.open(&first).unwrap();
    editor.insert(5, "!").unwrap();
    editor.undo();
    assert!(editor.can_redo());

    editor.open(&second).unwrap();
    assert_eq!(editor.text(), "second");
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
    assert!(!editor.is_modified());
    assert_eq!(editor.file_path(), Some(second.as_path()));
}

#[test]
fn test_open_missing_file_fails_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = Editor::with_text("keep", &settings());
    editor.insert(4, "!").unwrap();

    let err = editor.open(&dir.path().join("missing.py")).unwrap_err();
    assert!(err.to_string().contains("failed to read file"));
    assert_eq!(editor.text(), "keep!");
    assert!(editor.can_undo());
}

// ── Direct tracker usage ───────────────────────────────────────────────

#[test]
fn test_tracker_replays_through_shared_document() {
    let doc = SharedDocument::new(TextDocument::from("fill(1)"));
    let mut tracker = ChangeTracker::new();

    let deltas = vec![TextDelta::remove(5, "1"), TextDelta::insert(5, "0.5")];
    for delta in &deltas {
        doc.apply(delta).unwrap();
    }
    tracker.commit(EditBatch::new(deltas), doc.clone(), false);
    assert_eq!(doc.text(), "fill(0.5)");

    tracker.undo(false);
    assert_eq!(doc.text(), "fill(1)");
    tracker.redo(false);
    assert_eq!(doc.text(), "fill(0.5)");
    assert_eq!(tracker.change_count().value(), Some(1));
}

#[test]
fn test_history_depth_from_settings() {
    let mut editor = Editor::new(&HistorySettings {
        max_depth: 2,
        group_timeout_ms: 0,
        notify_on_mark_clean: true,
    });
    for (i, c) in ["a", "b", "c", "d"].iter().enumerate() {
        editor.insert(i, c).unwrap();
    }
    assert_eq!(editor.history().undo_depth(), 2);

    while editor.can_undo() {
        editor.undo();
    }
    assert_eq!(editor.text(), "ab");
    assert!(editor.is_modified());
}

//! JSON edit scripts replayed against an `Editor`.
//!
//! A script is a JSON array of steps, e.g.
//! `[{"insert": {"position": 0, "text": "hi"}}, "undo", "redo"]`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotpad_core::Editor;
use plotpad_mod_history::AffectedRange;
use serde::{Deserialize, Serialize};

/// One scripted editor action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Insert { position: usize, text: String },
    Remove { start: usize, end: usize },
    Undo,
    Redo,
    /// Start a new undo step with the next edit.
    Break,
    Save { path: PathBuf },
    MarkClean,
    Reset,
}

impl Step {
    fn label(&self) -> String {
        match self {
            Self::Insert { position, text } => format!("insert {text:?} at {position}"),
            Self::Remove { start, end } => format!("remove {start}..{end}"),
            Self::Undo => "undo".to_string(),
            Self::Redo => "redo".to_string(),
            Self::Break => "break".to_string(),
            Self::Save { path } => format!("save {}", path.display()),
            Self::MarkClean => "mark_clean".to_string(),
            Self::Reset => "reset".to_string(),
        }
    }
}

/// Editor state after a step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub action: String,
    pub count: String,
    pub modified: bool,
    pub range: Option<AffectedRange>,
    pub text: String,
}

/// Parses a script from JSON text.
///
/// # Errors
///
/// Returns an error if the JSON is not a valid step list.
pub fn parse(json: &str) -> Result<Vec<Step>> {
    serde_json::from_str(json).context("invalid edit script")
}

/// Reads and parses a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Vec<Step>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script: {}", path.display()))?;
    parse(&json).with_context(|| format!("in {}", path.display()))
}

/// Runs `steps` in order, reporting the editor state after each one.
///
/// # Errors
///
/// Stops at the first step that fails (bad range, unwritable save path).
pub fn run(editor: &mut Editor, steps: &[Step]) -> Result<Vec<StepReport>> {
    let mut reports = Vec::with_capacity(steps.len());
    for (i, step) in steps.iter().enumerate() {
        tracing::debug!(step = i, "{}", step.label());
        let range = match step {
            Step::Insert { position, text } => Some(editor.insert(*position, text)?),
            Step::Remove { start, end } => Some(editor.remove(*start, *end)?),
            Step::Undo => editor.undo(),
            Step::Redo => editor.redo(),
            Step::Break => {
                editor.break_group();
                None
            }
            Step::Save { path } => {
                editor.save_to(path)?;
                None
            }
            Step::MarkClean => {
                editor.mark_clean();
                None
            }
            Step::Reset => {
                editor.reset_history();
                None
            }
        };
        reports.push(StepReport {
            step: i,
            action: step.label(),
            count: editor.change_count().to_string(),
            modified: editor.is_modified(),
            range,
            text: editor.text(),
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use plotpad_config::HistorySettings;

    use super::*;

    fn editor() -> Editor {
        Editor::new(&HistorySettings {
            group_timeout_ms: 0,
            ..HistorySettings::default()
        })
    }

    #[test]
    fn test_parse_all_step_kinds() {
        let steps = parse(
            r#"[
                {"insert": {"position": 0, "text": "hi"}},
                {"remove": {"start": 0, "end": 1}},
                "undo", "redo", "break", "mark_clean", "reset",
                {"save": {"path": "out.py"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(steps.len(), 8);
        assert_eq!(
            steps[0],
            Step::Insert {
                position: 0,
                text: "hi".to_string()
            }
        );
        assert_eq!(steps[2], Step::Undo);
        assert_eq!(
            steps[7],
            Step::Save {
                path: PathBuf::from("out.py")
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_step() {
        assert!(parse(r#"["explode"]"#).is_err());
        assert!(parse("{}").is_err());
    }

    #[test]
    fn test_run_reports_each_step() {
        let steps = parse(
            r#"[
                {"insert": {"position": 0, "text": "A"}},
                {"insert": {"position": 1, "text": "B"}},
                "mark_clean",
                "undo",
                {"insert": {"position": 1, "text": "C"}}
            ]"#,
        )
        .unwrap();
        let mut editor = editor();
        let reports = run(&mut editor, &steps).unwrap();

        let counts: Vec<&str> = reports.iter().map(|r| r.count.as_str()).collect();
        assert_eq!(counts, vec!["1", "2", "0", "unrecoverable", "unrecoverable"]);
        assert!(!reports[2].modified);
        assert!(reports[4].modified);
        assert_eq!(reports[4].text, "AC");
        assert_eq!(reports[0].range, Some(AffectedRange::new(0, 1)));
    }

    #[test]
    fn test_run_stops_at_failing_step() {
        let steps = vec![
            Step::Insert {
                position: 0,
                text: "x".to_string(),
            },
            Step::Remove { start: 0, end: 5 },
            Step::Undo,
        ];
        let mut editor = editor();
        assert!(run(&mut editor, &steps).is_err());
        assert_eq!(editor.text(), "x");
    }

    #[test]
    fn test_run_save_step_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.py");
        let steps = vec![
            Step::Insert {
                position: 0,
                text: "print(1)".to_string(),
            },
            Step::Save { path: path.clone() },
        ];
        let mut editor = editor();
        let reports = run(&mut editor, &steps).unwrap();
        assert!(!reports[1].modified);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "print(1)");
    }

    #[test]
    fn test_mark_clean_reports_unmodified_without_notification() {
        let mut editor = Editor::new(&HistorySettings {
            group_timeout_ms: 0,
            notify_on_mark_clean: false,
            ..HistorySettings::default()
        });
        let steps = parse(r#"[{"insert": {"position": 0, "text": "x"}}, "mark_clean"]"#).unwrap();
        let reports = run(&mut editor, &steps).unwrap();
        assert!(reports[0].modified);
        assert_eq!(reports[1].count, "0");
        assert!(!reports[1].modified);
    }

    #[test]
    fn test_report_serializes() {
        let steps = vec![Step::Insert {
            position: 0,
            text: "z".to_string(),
        }];
        let mut editor = editor();
        let reports = run(&mut editor, &steps).unwrap();
        let json = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(json["count"], "1");
        assert_eq!(json["range"]["end"], 1);
    }

    #[test]
    fn test_load_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("nope.json")).is_err());
    }
}

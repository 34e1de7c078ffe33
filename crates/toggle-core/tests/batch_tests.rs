//! Integration tests for the per-file and batch orchestrators

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

use toggle_core::{FileJob, FileStatus, process_batch, process_file};
use toggle_engine::{CommentStyle, Rule, RuleOutcome, Toggle};
use toggle_fs::WriteMode;

fn fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn bottom_bar_rules() -> Vec<Rule> {
    vec![
        Rule::indent_block(["<Btn"], ["testID=\"bottomBarMessagesBtn\""]).with_label("messages"),
    ]
}

#[rstest]
#[case(WriteMode::InPlace)]
#[case(WriteMode::Atomic)]
fn test_modified_file_is_written_back(#[case] mode: WriteMode) {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(
        &dir,
        "BottomBar.tsx",
        "  <Btn testID=\"bottomBarMessagesBtn\" />\n",
    );

    let job = FileJob::new(&path, bottom_bar_rules(), CommentStyle::Jsx);
    let report = process_file(&job, Toggle::On, mode).unwrap();

    assert_eq!(report.status, FileStatus::Modified);
    assert_eq!(report.summary.insertions, 2);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "  {/*\n  <Btn testID=\"bottomBarMessagesBtn\" />\n  */}\n"
    );
}

#[test]
fn test_unchanged_file_is_not_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "Other.tsx", "<Other />\n");
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    let job = FileJob::new(&path, bottom_bar_rules(), CommentStyle::Jsx);
    let report = process_file(&job, Toggle::On, WriteMode::InPlace).unwrap();

    assert_eq!(report.status, FileStatus::Unchanged);
    assert!(report.summary.is_empty());
    assert_eq!(report.rules[0].outcome, RuleOutcome::NotFound);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
}

#[test]
fn test_second_run_reports_already_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(
        &dir,
        "BottomBar.tsx",
        "  <Btn testID=\"bottomBarMessagesBtn\" />\n",
    );
    let job = FileJob::new(&path, bottom_bar_rules(), CommentStyle::Jsx);

    let first = process_file(&job, Toggle::On, WriteMode::InPlace).unwrap();
    assert_eq!(first.status, FileStatus::Modified);

    let second = process_file(&job, Toggle::On, WriteMode::InPlace).unwrap();
    assert_eq!(second.status, FileStatus::Unchanged);
    assert_eq!(second.rules[0].outcome, RuleOutcome::AlreadyApplied);
}

#[test]
fn test_toggle_off_round_trips_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let original = "{showFeeds && (\n  <DesktopFeeds />\n)}\n";
    let path = fixture(&dir, "RightNav.tsx", original);
    let rules = vec![Rule::indent_block(["<DesktopFeeds"], ["DesktopFeeds"])];
    let job = FileJob::new(&path, rules, CommentStyle::Jsx);

    process_file(&job, Toggle::On, WriteMode::InPlace).unwrap();
    assert_ne!(fs::read_to_string(&path).unwrap(), original);

    process_file(&job, Toggle::Off, WriteMode::InPlace).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_batch_isolates_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = fixture(
        &dir,
        "BottomBar.tsx",
        "  <Btn testID=\"bottomBarMessagesBtn\" />\n",
    );
    let missing = dir.path().join("Absent.tsx");

    let jobs = vec![
        FileJob::new(&missing, bottom_bar_rules(), CommentStyle::Jsx),
        FileJob::new(&good, bottom_bar_rules(), CommentStyle::Jsx),
    ];
    let reports = process_batch(&jobs, Toggle::On, WriteMode::InPlace);

    assert_eq!(reports.len(), 2);
    assert!(matches!(reports[0].status, FileStatus::Failed { .. }));
    assert_eq!(reports[1].status, FileStatus::Modified);
}

#[test]
fn test_jobs_round_trip_through_json() {
    let json = r#"{
        "path": "src/view/shell/Drawer.tsx",
        "style": "jsx",
        "rules": [
            {"kind": "indent_block",
             "start_markers": ["<ChatMenuItem"],
             "targets": ["ChatMenuItem"]}
        ]
    }"#;
    let job: FileJob = serde_json::from_str(json).unwrap();
    assert_eq!(job.style, CommentStyle::Jsx);
    assert_eq!(job.path, std::path::PathBuf::from("src/view/shell/Drawer.tsx"));
    assert_eq!(job.rules.len(), 1);
}

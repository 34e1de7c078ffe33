//! File jobs, reports, and batch processing

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use toggle_engine::{ChangeSummary, CommentStyle, Rule, RuleReport, Toggle, apply};
use toggle_fs::WriteMode;

use crate::Result;

/// One file plus the ordered rules and comment style to apply to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileJob {
    pub path: PathBuf,
    pub rules: Vec<Rule>,
    pub style: CommentStyle,
}

impl FileJob {
    pub fn new(path: impl Into<PathBuf>, rules: Vec<Rule>, style: CommentStyle) -> Self {
        Self {
            path: path.into(),
            rules,
            style,
        }
    }

    /// Build a job picking the comment style from the file extension,
    /// defaulting to the markup style.
    pub fn for_path(path: impl Into<PathBuf>, rules: Vec<Rule>) -> Self {
        let path = path.into();
        let style = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(CommentStyle::from_extension)
            .unwrap_or(CommentStyle::Jsx);
        Self { path, rules, style }
    }
}

/// Terminal state of one file's run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Rules changed the text and the file was written back
    Modified,
    /// All rules left the text byte-identical; nothing was written
    Unchanged,
    /// Read or write failed; siblings in the batch are unaffected
    Failed { message: String },
}

/// Outcome of one file's run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub rules: Vec<RuleReport>,
    pub summary: ChangeSummary,
}

impl FileReport {
    fn failed(path: &Path, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Failed { message },
            rules: Vec::new(),
            summary: ChangeSummary::default(),
        }
    }
}

/// Run one file's read-transform-write cycle.
///
/// The file is read once, the rule list is applied to the in-memory text,
/// and the result is written back only when it differs from the original.
pub fn process_file(job: &FileJob, toggle: Toggle, mode: WriteMode) -> Result<FileReport> {
    let original = toggle_fs::read_text(&job.path)?;
    let applied = apply(&original, &job.rules, job.style, toggle);

    let status = if applied.changed {
        toggle_fs::write_text(&job.path, &applied.text, mode)?;
        tracing::info!(path = %job.path.display(), "modified");
        FileStatus::Modified
    } else {
        tracing::info!(path = %job.path.display(), "no changes");
        FileStatus::Unchanged
    };

    Ok(FileReport {
        path: job.path.clone(),
        status,
        rules: applied.reports,
        summary: ChangeSummary::compute(&original, &applied.text),
    })
}

/// Run a batch of independent file jobs.
///
/// A failed file yields a `Failed` report and never aborts its siblings.
pub fn process_batch(jobs: &[FileJob], toggle: Toggle, mode: WriteMode) -> Vec<FileReport> {
    jobs.iter()
        .map(|job| {
            process_file(job, toggle, mode).unwrap_or_else(|e| {
                tracing::error!(path = %job.path.display(), error = %e, "file failed");
                FileReport::failed(&job.path, e.to_string())
            })
        })
        .collect()
}

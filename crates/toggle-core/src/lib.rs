//! Per-file orchestration for the feature toggler
//!
//! Sits above the pure engine and the filesystem layer:
//!
//! ```text
//!      driver scripts
//!            |
//!       toggle-core
//!        |        |
//! toggle-engine toggle-fs
//! ```
//!
//! A [`FileJob`] names a file, its rule list, and a comment style. Jobs run
//! independently: a failed read or write marks that file's report and the
//! batch carries on. Files are written back only when a rule changed them.

pub mod batch;
pub mod error;

pub use batch::{FileJob, FileReport, FileStatus, process_batch, process_file};
pub use error::{Error, Result};

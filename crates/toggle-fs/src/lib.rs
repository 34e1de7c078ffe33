//! Safe file I/O for the feature toggler
//!
//! Reads are plain; writes are either in-place (matching the original
//! scripts' behavior) or atomic via write-to-temp-then-rename with an
//! advisory lock, selected by [`WriteMode`] at the call boundary.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{WriteMode, read_text, write_text};

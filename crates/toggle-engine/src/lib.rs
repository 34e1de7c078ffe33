//! Structural text patching for toggling UI feature blocks
//!
//! Provides the transform engine that locates markup-like element blocks by
//! indentation, decides by substring containment whether they should be
//! toggled, and idempotently wraps or unwraps them in comment sentinels.
//! Operates purely on in-memory text; file I/O belongs to `toggle-fs`.

pub mod apply;
pub mod block;
pub mod diff;
pub mod document;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod replace;
pub mod rule;
pub mod scan;
pub mod style;
pub mod wrap;

pub use apply::{Applied, Toggle, apply};
pub use block::{Block, ConditionalWrapper};
pub use diff::ChangeSummary;
pub use document::{Document, Line};
pub use error::{Error, Result};
pub use rule::{Rule, RuleKind, RuleOutcome, RuleReport, RuleStats};
pub use scan::{BlockFinder, Candidate};
pub use style::CommentStyle;

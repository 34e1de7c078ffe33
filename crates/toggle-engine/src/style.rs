//! Comment sentinel styles

use serde::{Deserialize, Serialize};

/// Comment sentinel pair used to delimit toggled regions.
///
/// Markup-bracketed regions (JSX element trees) need the braced form so the
/// sentinels are valid inside an element body; plain statement regions use
/// ordinary block comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// Braced markup comment: `{/*` ... `*/}`
    Jsx,
    /// Plain block comment: `/*` ... `*/`
    Js,
}

impl CommentStyle {
    /// Opening sentinel token
    pub const fn open(self) -> &'static str {
        match self {
            Self::Jsx => "{/*",
            Self::Js => "/*",
        }
    }

    /// Closing sentinel token
    pub const fn close(self) -> &'static str {
        match self {
            Self::Jsx => "*/}",
            Self::Js => "*/",
        }
    }

    /// Wrap a payload on a single line: `{/* payload */}`
    pub fn wrap_inline(self, payload: &str) -> String {
        format!("{} {} {}", self.open(), payload, self.close())
    }

    /// Pick the style for a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jsx" | "tsx" => Some(Self::Jsx),
            "js" | "ts" | "mjs" | "cjs" => Some(Self::Js),
            _ => None,
        }
    }
}

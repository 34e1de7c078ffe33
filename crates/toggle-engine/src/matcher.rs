//! Match evaluator
//!
//! Pure literal substring tests on accumulated block text. Case-sensitive,
//! unanchored, OR-combined; no semantic analysis.

/// Does the text contain any of the target substrings?
pub fn any_target(text: &str, targets: &[String]) -> bool {
    targets.iter().any(|t| text.contains(t.as_str()))
}

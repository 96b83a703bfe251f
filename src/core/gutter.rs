//! Flattening of multiline `/* ... */` comment bodies.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Separator used when a gutter is collapsed and no other one is configured.
pub const DEFAULT_SEPARATOR: &str = " ";

// A line break, the indentation before the gutter star, the star itself and
// at most one space after it.
static GUTTER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\* ?").unwrap());

/// Remove the left-margin `*` of every continuation line in a comment body.
///
/// Each line break together with the gutter that follows it is replaced by
/// `separator`, so
///
/// ```text
/// A
///  * B
///  *
/// ```
///
/// becomes `"A B "` with the default separator. Text without any gutter is
/// returned as-is.
///
/// # Examples
///
/// ```
/// use tagdb::core::strip_gutter;
///
/// assert_eq!(strip_gutter("A\n * B\n * C\n *", "<br>"), "A<br>B<br>C<br>");
/// assert_eq!(strip_gutter("Simple Sample", " "), "Simple Sample");
/// ```
pub fn strip_gutter<'a>(text: &'a str, separator: &str) -> Cow<'a, str> {
    GUTTER_REGEX.replace_all(text, regex::NoExpand(separator))
}

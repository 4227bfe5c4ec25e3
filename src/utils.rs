//! Utility functions for deriving output file names

use regex::Regex;
use std::sync::LazyLock;

/// Extension appended to every document slug
pub const MARKDOWN_EXTENSION: &str = "md";

/// Whitespace, hyphens and characters that are unsafe in file names.
/// Any run of these collapses to a single hyphen.
#[allow(clippy::expect_used)]
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    // literal pattern, always compiles
    Regex::new(r#"[\s/\\?%*:|"<>-]+"#).expect("separator pattern is valid")
});

/// Derive a file-name stem from a document title
///
/// The title is lower-cased, every run of whitespace, hyphens or any of
/// `/ \ ? % * : | " < >` becomes one `-`, and a single leading and a single
/// trailing `-` are removed. Distinct titles may produce the same slug; no
/// collision handling happens here.
///
/// # Examples
///
/// ```
/// use notion_notes::utils::slugify;
///
/// assert_eq!(slugify("My First Note"), "my-first-note");
/// assert_eq!(slugify("  a/b: c?  "), "a-b-c");
/// assert_eq!(slugify("my-first-note"), "my-first-note");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let collapsed = SEPARATOR_RUN.replace_all(&lowered, "-");
    let collapsed: &str = &collapsed;
    let trimmed = collapsed.strip_prefix('-').unwrap_or(collapsed);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Output file name for a document title: `<slug>.md`
///
/// # Examples
///
/// ```
/// use notion_notes::utils::markdown_file_name;
///
/// assert_eq!(markdown_file_name("Untitled"), "untitled.md");
/// ```
#[must_use]
pub fn markdown_file_name(title: &str) -> String {
    format!("{}.{}", slugify(title), MARKDOWN_EXTENSION)
}

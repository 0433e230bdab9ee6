//! Text normalization helpers for inline fixtures.

/// Removes the common leading indentation from every non-blank line.
///
/// A leading newline is dropped so fixtures can start on the line after the
/// opening quote. Blank lines are kept, emptied of whitespace.
///
/// # Examples
///
/// ```
/// use confstruct_test_helpers::text::dedent;
///
/// let yaml = dedent(
///     "
///     caelus:
///       default: latest
///     ",
/// );
/// assert_eq!(yaml, "caelus:\n  default: latest\n");
/// ```
#[must_use]
pub fn dedent(value: &str) -> String {
    let body = value.strip_prefix('\n').unwrap_or(value);
    let margin = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    let mut out = String::with_capacity(body.len());
    for line in body.lines() {
        if !line.trim().is_empty() {
            out.push_str(line.get(margin..).unwrap_or(line));
        }
        out.push('\n');
    }
    let trimmed_len = out.trim_end_matches('\n').len();
    out.truncate(trimmed_len);
    out.push('\n');
    out
}

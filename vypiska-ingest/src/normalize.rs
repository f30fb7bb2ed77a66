//! Cell and text normalization shared by every layout.

/// Collapse an extracted cell into a single display line.
///
/// Missing or empty input yields `""`. Otherwise surrounding whitespace is
/// trimmed and every embedded newline becomes one space.
pub fn clean_text(text: Option<&str>) -> String {
    match text {
        Some(s) if !s.is_empty() => s.trim().replace('\n', " "),
        _ => String::new(),
    }
}

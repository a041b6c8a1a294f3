//! Title detection from first-page text.

/// Pick a document title from the first page's text: the first trimmed
/// line that is non-empty, longer than 3 characters, and not purely
/// numeric. Page-number artifacts commonly surface as short digit-only
/// lines at the top of extracted text.
///
/// Returns an empty string when no line qualifies.
pub fn detect_title(first_page_text: &str) -> String {
    for line in first_page_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.chars().count() <= 3 {
            continue;
        }
        if line.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        return line.to_string();
    }
    String::new()
}

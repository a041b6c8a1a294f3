//! Heading level classification.
//!
//! Two rule cascades over a trimmed line: the primary cascade used on the
//! rich extraction path, and a reduced cascade for degraded input where
//! only raw text survived. In both, rules are tested in a fixed order and
//! the first match wins.

use crate::model::HeadingLevel;
use crate::outline::FontSizeHistogram;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+[A-Z]").unwrap());
static NUMBERED_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\s+[A-Z]").unwrap());
static NUMBERED_H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\s+[A-Z]").unwrap());
static CHAPTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(Chapter|Section|Part)\s+\d+").unwrap());
static ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVX]+\.\s+[A-Z]").unwrap());
static LETTERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]\.\s+[A-Z]").unwrap());
static CAPS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z\s]+[A-Z]$").unwrap());

const H1_KEYWORDS: &[&str] = &["introduction", "conclusion", "overview", "summary", "abstract"];

/// Shortest line considered for classification at all.
const MIN_LINE_LEN: usize = 3;

/// Primary cascade. `histogram` is advisory; it does not change the
/// decision in the current rule set.
pub fn classify(line: &str, histogram: Option<&FontSizeHistogram>) -> Option<HeadingLevel> {
    let line = line.trim();
    let len = line.chars().count();
    if len < MIN_LINE_LEN {
        return None;
    }

    // 1. Numbered sections (1., 1.1, 1.1.1). Each pattern requires a
    // letter after its final separator, so deeper numbers fall through
    // the shallower checks.
    if NUMBERED_H1.is_match(line) {
        return Some(HeadingLevel::H1);
    }
    if NUMBERED_H2.is_match(line) {
        return Some(HeadingLevel::H2);
    }
    if NUMBERED_H3.is_match(line) {
        return Some(HeadingLevel::H3);
    }

    // 2. Chapter/section keywords
    if CHAPTER.is_match(line) {
        return Some(HeadingLevel::H1);
    }

    // 3. All caps
    if is_all_caps(line) && (4..=100).contains(&len) {
        return Some(HeadingLevel::H1);
    }

    // 4. Title case with reasonable length
    if is_title_case(line) && (5..=100).contains(&len) {
        let lower = line.to_lowercase();
        if H1_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return Some(HeadingLevel::H1);
        }
        return Some(HeadingLevel::H2);
    }

    // 5. Roman numerals
    if ROMAN.is_match(line) {
        return Some(HeadingLevel::H1);
    }

    // 6. Alphabetic sections (A. ..., B. ...)
    if LETTERED.is_match(line) {
        return Some(HeadingLevel::H2);
    }

    if let Some(hist) = histogram {
        if hist.distinct_count() > 2 {
            log::trace!(
                "no rule matched {:?}; page has {} distinct font sizes",
                line,
                hist.distinct_count()
            );
        }
    }

    None
}

/// Reduced cascade for text-only input.
pub fn classify_reduced(line: &str) -> Option<HeadingLevel> {
    let line = line.trim();
    let len = line.chars().count();
    if len < MIN_LINE_LEN {
        return None;
    }

    if CAPS_RUN.is_match(line) && (4..=100).contains(&len) {
        return Some(HeadingLevel::H1);
    }
    if NUMBERED_H1.is_match(line) {
        return Some(HeadingLevel::H1);
    }
    if NUMBERED_H2.is_match(line) {
        return Some(HeadingLevel::H2);
    }
    if NUMBERED_H3.is_match(line) {
        return Some(HeadingLevel::H3);
    }

    None
}

/// True when the line has at least one cased character and every cased
/// character is uppercase.
fn is_all_caps(line: &str) -> bool {
    let mut has_cased = false;
    for ch in line.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Title-case check: every word of cased characters starts uppercase and
/// continues lowercase. Mirrors the semantics of a case-scan where an
/// uppercase letter may only follow an uncased character and a lowercase
/// letter may only follow a cased one.
fn is_title_case(line: &str) -> bool {
    let mut has_cased = false;
    let mut prev_cased = false;
    for ch in line.chars() {
        if ch.is_uppercase() {
            if prev_cased {
                return false;
            }
            has_cased = true;
            prev_cased = true;
        } else if ch.is_lowercase() {
            if !prev_cased {
                return false;
            }
            has_cased = true;
        } else {
            prev_cased = false;
        }
    }
    has_cased
}

//! Rule cascade behavior through the public API.

use pdf_outline::outline::{classify, classify_reduced};
use pdf_outline::HeadingLevel;

#[test]
fn numbered_sections_map_to_depth() {
    assert_eq!(classify("1. Introduction", None), Some(HeadingLevel::H1));
    assert_eq!(classify("1.1 Background", None), Some(HeadingLevel::H2));
    assert_eq!(classify("1.1.1 Related Work", None), Some(HeadingLevel::H3));
}

#[test]
fn deep_numbers_do_not_match_shallow_patterns() {
    // A letter must follow the final dot and whitespace, so "1.1.1 ..."
    // falls through the one- and two-level checks.
    assert_eq!(classify("2.3.1 Sampling Strategy", None), Some(HeadingLevel::H3));
    assert_eq!(classify("10.2 Threat Model", None), Some(HeadingLevel::H2));
}

#[test]
fn chapter_keywords_are_case_insensitive() {
    assert_eq!(classify("Chapter 1", None), Some(HeadingLevel::H1));
    assert_eq!(classify("section 4", None), Some(HeadingLevel::H1));
    assert_eq!(classify("PART 2", None), Some(HeadingLevel::H1));
}

#[test]
fn all_caps_line_is_h1() {
    assert_eq!(classify("INTRODUCTION", None), Some(HeadingLevel::H1));
    assert_eq!(classify("RELATED WORK", None), Some(HeadingLevel::H1));
}

#[test]
fn title_case_with_keyword_is_h1() {
    assert_eq!(
        classify("Conclusion And Future Work", None),
        Some(HeadingLevel::H1)
    );
    assert_eq!(classify("Executive Summary", None), Some(HeadingLevel::H1));
}

#[test]
fn title_case_without_keyword_is_h2() {
    assert_eq!(
        classify("Experimental Results", None),
        Some(HeadingLevel::H2)
    );
}

#[test]
fn roman_numeral_sections_are_h1() {
    assert_eq!(classify("II. Prior Art", None), Some(HeadingLevel::H1));
    assert_eq!(classify("XIV. Appendix Material", None), Some(HeadingLevel::H1));
}

#[test]
fn lettered_sections_are_h2() {
    assert_eq!(classify("B. Hyperparameters", None), Some(HeadingLevel::H2));
}

#[test]
fn short_lines_are_never_headings() {
    assert_eq!(classify("Hi", None), None);
    assert_eq!(classify_reduced("Hi"), None);
}

#[test]
fn body_text_is_excluded() {
    assert_eq!(
        classify("We evaluate the approach on three datasets.", None),
        None
    );
    assert_eq!(classify("see figure 2 for details", None), None);
}

#[test]
fn reduced_cascade_order() {
    // All-caps wins before the numbered checks.
    assert_eq!(classify_reduced("ACKNOWLEDGMENTS"), Some(HeadingLevel::H1));
    assert_eq!(classify_reduced("3. Evaluation"), Some(HeadingLevel::H1));
    assert_eq!(classify_reduced("3.2 Ablations"), Some(HeadingLevel::H2));
    assert_eq!(classify_reduced("3.2.1 Layer Count"), Some(HeadingLevel::H3));
    // Rules beyond the reduced set do not apply.
    assert_eq!(classify_reduced("Chapter 1"), None);
    assert_eq!(classify_reduced("Experimental Results"), None);
}

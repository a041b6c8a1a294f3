//! End-to-end extraction over synthetic PDFs built with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use pdf_outline::{
    extract_outline, extract_outline_from_bytes, ExtractOptions, ExtractionPipeline, HeadingLevel,
    JsonFormat,
};
use std::time::Duration;

/// Build a PDF where each page is a list of (text, font size) lines laid
/// out top to bottom with enough vertical gap that the text extractor
/// sees them as separate lines.
fn build_pdf(pages: &[&[(&str, i32)]]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![Operation::new("BT", vec![])];
        for (i, (text, size)) in lines.iter().enumerate() {
            operations.push(Operation::new("Tf", vec!["F1".into(), (*size).into()]));
            if i == 0 {
                operations.push(Operation::new("Td", vec![72.into(), 720.into()]));
            } else {
                operations.push(Operation::new("Td", vec![0.into(), (-50).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            Content { operations }.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn report_pdf() -> Vec<u8> {
    build_pdf(&[
        &[
            ("Annual Report 2031", 18),
            ("1. Introduction", 14),
            ("We describe yearly progress and lessons learned.", 10),
        ],
        &[
            ("2. Methods", 14),
            ("2.1 Data Collection", 12),
            ("The data was gathered over twelve months.", 10),
        ],
    ])
}

#[test]
fn extracts_title_from_first_page() {
    let doc = extract_outline_from_bytes(&report_pdf());
    assert_eq!(doc.title, "Annual Report 2031");
    assert!(doc.error.is_none());
}

#[test]
fn extracts_headings_with_page_numbers() {
    let doc = extract_outline_from_bytes(&report_pdf());

    let find = |text: &str| doc.outline.iter().find(|e| e.text == text);

    let intro = find("1. Introduction").expect("missing introduction heading");
    assert_eq!(intro.level, HeadingLevel::H1);
    assert_eq!(intro.page, 1);

    let methods = find("2. Methods").expect("missing methods heading");
    assert_eq!(methods.level, HeadingLevel::H1);
    assert_eq!(methods.page, 2);

    let data = find("2.1 Data Collection").expect("missing subsection heading");
    assert_eq!(data.level, HeadingLevel::H2);
    assert_eq!(data.page, 2);
}

#[test]
fn body_text_stays_out_of_the_outline() {
    let doc = extract_outline_from_bytes(&report_pdf());
    assert!(doc
        .outline
        .iter()
        .all(|e| !e.text.contains("lessons learned")));
    assert!(doc
        .outline
        .iter()
        .all(|e| !e.text.contains("twelve months")));
}

#[test]
fn page_numbers_are_positive_and_non_decreasing() {
    let doc = extract_outline_from_bytes(&report_pdf());
    assert!(!doc.outline.is_empty());
    let mut last = 1;
    for entry in &doc.outline {
        assert!(entry.page >= 1);
        assert!(entry.page >= last);
        last = entry.page;
    }
}

#[test]
fn extraction_is_deterministic() {
    let bytes = report_pdf();
    let first = extract_outline_from_bytes(&bytes);
    let second = extract_outline_from_bytes(&bytes);
    assert_eq!(first, second);

    let json_a = pdf_outline::render::to_json(&first, JsonFormat::Compact).unwrap();
    let json_b = pdf_outline::render::to_json(&second, JsonFormat::Compact).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn expired_deadline_keeps_title_and_reports_truncation() {
    let options = ExtractOptions::new().with_deadline(Duration::ZERO);
    let doc = ExtractionPipeline::with_options(options).extract_bytes(&report_pdf());

    // Work already done before expiry survives; the truncation is
    // reported, not turned into a total failure.
    assert_eq!(doc.title, "Annual Report 2031");
    assert!(doc.outline.is_empty());
    assert!(doc
        .error
        .as_deref()
        .is_some_and(|e| e.contains("time budget")));
}

#[test]
fn garbage_input_is_a_total_failure_document() {
    let doc = extract_outline_from_bytes(b"\xFF\xFEcertainly not a pdf");
    assert_eq!(doc.title, "Error extracting title");
    assert!(doc.outline.is_empty());
    assert!(doc.error.as_deref().is_some_and(|e| !e.is_empty()));
}

#[test]
fn extraction_from_disk_matches_in_memory() {
    let bytes = report_pdf();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, &bytes).unwrap();

    let from_disk = extract_outline(&path);
    let from_memory = extract_outline_from_bytes(&bytes);
    assert_eq!(from_disk, from_memory);
}

#[test]
fn all_caps_heading_on_rich_path() {
    let bytes = build_pdf(&[&[
        ("Survey Of Parsing Techniques", 18),
        ("ACKNOWLEDGMENTS", 12),
    ]]);
    let doc = extract_outline_from_bytes(&bytes);
    assert_eq!(doc.title, "Survey Of Parsing Techniques");
    let caps = doc
        .outline
        .iter()
        .find(|e| e.text == "ACKNOWLEDGMENTS")
        .expect("missing all-caps heading");
    assert_eq!(caps.level, HeadingLevel::H1);
}

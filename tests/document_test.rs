use legalease::domain::{FormatTag, SourceDocument, TaskKind, extension_of};

#[test]
fn given_known_extensions_when_parsing_then_maps_to_tag() {
    assert_eq!(FormatTag::parse("pdf"), FormatTag::Pdf);
    assert_eq!(FormatTag::parse("DOCX"), FormatTag::Docx);
    assert_eq!(FormatTag::parse(" txt "), FormatTag::Txt);
}

#[test]
fn given_unknown_extension_when_parsing_then_returns_unknown() {
    assert_eq!(FormatTag::parse("jpg"), FormatTag::Unknown);
    assert_eq!(FormatTag::parse("doc"), FormatTag::Unknown);
    assert!(!FormatTag::Unknown.is_supported());
}

#[test]
fn given_filename_when_creating_document_then_tag_comes_from_last_extension() {
    let document = SourceDocument::new("contract.final.PDF".to_string(), vec![1, 2, 3]);

    assert_eq!(document.format_tag, FormatTag::Pdf);
    assert_eq!(document.size_bytes(), 3);
}

#[test]
fn given_filename_without_extension_when_creating_document_then_tag_is_unknown() {
    let document = SourceDocument::new("README".to_string(), Vec::new());

    assert_eq!(document.format_tag, FormatTag::Unknown);
}

#[test]
fn given_filenames_when_taking_extension_then_returns_text_after_last_dot() {
    assert_eq!(extension_of("a.b.txt"), Some("txt"));
    assert_eq!(extension_of("trailing."), None);
    assert_eq!(extension_of("noext"), None);
}

#[test]
fn given_explicit_format_when_creating_document_then_filename_is_ignored_for_tag() {
    let document =
        SourceDocument::with_format("upload.bin".to_string(), FormatTag::Txt, b"hi".to_vec());

    assert_eq!(document.format_tag, FormatTag::Txt);
}

#[test]
fn given_task_kinds_when_displayed_then_use_snake_case_names() {
    assert_eq!(TaskKind::Simplify.to_string(), "simplify");
    assert_eq!(TaskKind::Summarize.to_string(), "summarize");
    assert_eq!(TaskKind::ExplainTerm.to_string(), "explain_term");
}

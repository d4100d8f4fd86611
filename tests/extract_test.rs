//! Integration tests for text extraction against generated PDFs.

use std::fs::File;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tempfile::TempDir;

use pdfchunk::pipeline::{run, Config};
use pdfchunk::{
    extract_text, extract_text_with_options, DocumentInfo, Error, ExtractOptions, LopdfBackend,
    PageSelection, PageSource, TextExtractor,
};

/// Writes a PDF with one text line per page. `None` pages have no content.
fn write_pdf(dir: &Path, name: &str, pages: &[Option<&str>]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = match text {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

#[test]
fn test_extracts_pages_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(
        dir.path(),
        "ordered.pdf",
        &[Some("Alpha page"), Some("Bravo page"), Some("Charlie page")],
    );

    let text = extract_text(&path).unwrap();
    let alpha = text.find("Alpha page").unwrap();
    let bravo = text.find("Bravo page").unwrap();
    let charlie = text.find("Charlie page").unwrap();
    assert!(alpha < bravo && bravo < charlie);
}

#[test]
fn test_text_is_concatenation_of_page_texts() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(dir.path(), "concat.pdf", &[Some("one"), Some("two")]);

    let backend = LopdfBackend::load_file(&path).unwrap();
    let expected: String = backend
        .page_numbers()
        .into_iter()
        .map(|page| backend.page_text(page).unwrap())
        .collect();

    assert_eq!(extract_text(&path).unwrap(), expected);
}

#[test]
fn test_extraction_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(dir.path(), "same.pdf", &[Some("repeatable")]);
    assert_eq!(extract_text(&path).unwrap(), extract_text(&path).unwrap());
}

#[test]
fn test_page_without_text_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(dir.path(), "blank.pdf", &[None, None]);
    assert!(extract_text(&path).unwrap().trim().is_empty());
}

#[test]
fn test_page_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(
        dir.path(),
        "selected.pdf",
        &[Some("first"), Some("second"), Some("third")],
    );

    let options = ExtractOptions::new().with_pages(PageSelection::parse("2-3").unwrap());
    let text = extract_text_with_options(&path, options).unwrap();
    assert!(!text.contains("first"));
    assert!(text.contains("second"));
    assert!(text.contains("third"));
}

#[test]
fn test_extract_from_reader_and_bytes() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(dir.path(), "reader.pdf", &[Some("streamed")]);

    let extractor = TextExtractor::new();
    let from_reader = extractor.extract_reader(File::open(&path).unwrap()).unwrap();
    let from_bytes = extractor
        .extract_bytes(&std::fs::read(&path).unwrap())
        .unwrap();

    assert!(from_reader.contains("streamed"));
    assert_eq!(from_reader, from_bytes);
}

#[test]
fn test_document_info() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(dir.path(), "info.pdf", &[Some("a"), Some("b"), None]);

    let backend = LopdfBackend::load_file(&path).unwrap();
    let info = DocumentInfo::from_backend(&backend);
    assert_eq!(info.page_count, 3);
    assert_eq!(info.version, "1.5");
}

/// Points a page's `/Contents` at an object that does not exist.
fn break_page_contents(path: &Path, page: u32) {
    let mut doc = Document::load(path).unwrap();
    let page_id = doc.get_pages()[&page];
    doc.get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .unwrap()
        .set("Contents", Object::Reference((999, 0)));
    doc.save(path).unwrap();
}

#[test]
fn test_unreadable_page_aborts_extraction() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(
        dir.path(),
        "broken.pdf",
        &[Some("GOODPAGE"), Some("LOSTPAGE"), Some("GOODPAGE")],
    );
    break_page_contents(&path, 2);

    let result = extract_text(&path);
    assert!(matches!(result, Err(Error::DocumentRead { page: 2, .. })));
}

#[test]
fn test_unreadable_page_outside_selection_is_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(
        dir.path(),
        "broken_tail.pdf",
        &[Some("GOODPAGE"), Some("LOSTPAGE")],
    );
    break_page_contents(&path, 2);

    let options = ExtractOptions::new().with_pages(PageSelection::Pages(vec![1]));
    let text = extract_text_with_options(&path, options).unwrap();
    assert!(text.contains("GOODPAGE"));
}

#[test]
fn test_missing_path_is_open_error() {
    let dir = TempDir::new().unwrap();
    let result = extract_text(dir.path().join("absent.pdf"));
    assert!(matches!(result, Err(Error::DocumentOpen { .. })));
}

#[test]
fn test_non_pdf_is_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.pdf");
    std::fs::write(&path, "plain text pretending to be a pdf").unwrap();

    let result = extract_text(&path);
    assert!(matches!(result, Err(Error::DocumentOpen { .. })));
}

#[test]
fn test_pipeline_run() {
    let dir = TempDir::new().unwrap();
    let body = "The quick brown fox jumps over the lazy dog";
    let path = write_pdf(dir.path(), "pipeline.pdf", &[Some(body), Some(body)]);

    let config = Config::new(&path).with_chunk_size(20).with_overlap(5);
    let report = run(&config).unwrap().expect("input exists");

    let text = extract_text(&path).unwrap();
    assert_eq!(report.char_count, text.chars().count());
    assert!(report.chunk_count() > 1);
    assert_eq!(report.first_chunk().unwrap().chars().count(), 20);
    assert!(report.chunks[..report.chunk_count() - 1]
        .iter()
        .all(|c| c.chars().count() == 20));
}

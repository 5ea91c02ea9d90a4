// Rendered PDF output: document shape and byte-level determinism.

mod common;

use std::sync::Arc;

use common::InMemoryCatalog;
use meter_report::application::report_service::ReportService;
use meter_report::domain::report::ReportRequest;
use meter_report::infrastructure::config::{GraphConfig, GraphPagesConfig, PageConfig};
use meter_report::infrastructure::pdf_canvas::PdfCanvas;
use sha2::{Digest, Sha256};

fn sample_pages() -> GraphPagesConfig {
    GraphPagesConfig {
        pages: vec![PageConfig {
            name: "Summary-PDF".to_string(),
            graph_size: None,
            graphs: vec![
                GraphConfig {
                    name: "Heap Memory".to_string(),
                    meters: vec![
                        "JVM|Memory|Heap Memory Used".to_string(),
                        "JVM|Memory|Heap Memory Free".to_string(),
                    ],
                },
                GraphConfig {
                    name: "CPU".to_string(),
                    meters: vec!["OS|CPU|CPU Active".to_string()],
                },
                GraphConfig {
                    name: "Threads".to_string(),
                    meters: vec!["JVM|Thread|JVM Thread Count".to_string()],
                },
            ],
        }],
    }
}

fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_meter("00|JVM|Memory|Heap Memory Used", &[100.0, 220.0, 180.0, 260.0])
        .with_meter("00|JVM|Memory|Heap Memory Free", &[400.0, 280.0, 320.0, 240.0])
        .with_meter("00|OS|CPU|CPU Active", &[0.2, 0.4, 0.3, 0.7])
}

async fn render_sample_pdf() -> Vec<u8> {
    let service = ReportService::new(Arc::new(sample_catalog()), sample_pages(), 0);
    let request = ReportRequest::new(Some(3_600), None, None, Some(1_700_000_400), None);
    let prepared = service.prepare(&request).await.expect("stage report");
    let canvas = PdfCanvas::new(&request.report_name).expect("open pdf document");
    let report = prepared.render(canvas).expect("render report");
    assert_eq!(report.status, "ok");
    report.bytes
}

/// Blanks the metadata the PDF writer stamps per run (creation timestamps,
/// random document identifiers) while keeping byte offsets intact, so two
/// renders of the same input can be compared whole.
fn scrub_volatile_metadata(bytes: &[u8]) -> Vec<u8> {
    const SEGMENTS: [(&[u8], u8); 4] = [
        (b"/CreationDate(", b')'),
        (b"/ModDate(", b')'),
        (b"/ID[", b']'),
        (b"/Producer(", b')'),
    ];
    const XML_TAGS: [&str; 6] = [
        "xmp:CreateDate",
        "xmp:ModifyDate",
        "xmp:MetadataDate",
        "xmpMM:DocumentID",
        "xmpMM:InstanceID",
        "xmpMM:VersionID",
    ];

    let mut data = bytes.to_vec();
    for (tag, terminator) in SEGMENTS {
        zero_segment(&mut data, tag, terminator);
    }
    for tag in XML_TAGS {
        let open = format!("<{}>", tag);
        let close = format!("</{}>", tag);
        zero_segment_between(&mut data, open.as_bytes(), close.as_bytes());
    }
    data
}

fn zero_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
    let mut index = 0;
    while index + tag.len() <= data.len() {
        if data[index..].starts_with(tag) {
            let mut cursor = index + tag.len();
            while cursor < data.len() && data[cursor] != terminator {
                if !data[cursor].is_ascii_whitespace() && !matches!(data[cursor], b'<' | b'>') {
                    data[cursor] = b'0';
                }
                cursor += 1;
            }
            index = cursor;
        } else {
            index += 1;
        }
    }
}

fn zero_segment_between(data: &mut [u8], open: &[u8], close: &[u8]) {
    let mut index = 0;
    while index + open.len() <= data.len() {
        if data[index..].starts_with(open) {
            let mut cursor = index + open.len();
            while cursor < data.len() && !data[cursor..].starts_with(close) {
                data[cursor] = b'0';
                cursor += 1;
            }
            index = cursor;
        } else {
            index += 1;
        }
    }
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(scrub_volatile_metadata(bytes));
    hasher.finalize().into()
}

#[tokio::test]
async fn test_report_is_a_pdf_document() {
    let bytes = render_sample_pdf().await;
    assert!(bytes.starts_with(b"%PDF-"), "missing PDF magic");
    assert!(bytes.len() > 1_000, "implausibly small document");
    let tail = &bytes[bytes.len().saturating_sub(32)..];
    assert!(
        tail.windows(5).any(|w| w == b"%%EOF".as_slice()),
        "missing PDF trailer"
    );
}

#[tokio::test]
async fn test_same_input_renders_identical_bytes() {
    let first = render_sample_pdf().await;
    let second = render_sample_pdf().await;

    assert_eq!(first.len(), second.len(), "document sizes diverge");
    assert_eq!(
        normalized_hash(&first),
        normalized_hash(&second),
        "documents diverge beyond volatile metadata"
    );
}

#[tokio::test]
async fn test_unknown_page_renders_single_page_document() {
    let service = ReportService::new(Arc::new(sample_catalog()), sample_pages(), 0);
    let request = ReportRequest::new(
        Some(3_600),
        None,
        None,
        Some(1_700_000_400),
        Some("Watchdog".to_string()),
    );
    let prepared = service.prepare(&request).await.expect("stage report");
    let canvas = PdfCanvas::new(&request.report_name).expect("open pdf document");
    let report = prepared.render(canvas).expect("render report");

    assert!(report.bytes.starts_with(b"%PDF-"));
    assert_eq!(report.page_name, "Watchdog");
}

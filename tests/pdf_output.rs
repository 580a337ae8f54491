mod common;

use common::{numbered_lines, sample_request};
use page_eleven::fonts::Font;
use page_eleven::model::Align;
use page_eleven::surface::{Surface, replay};
use page_eleven::{generate_pdf, layout, pdf};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn output_is_a_pdf() {
    let bytes = generate_pdf(&sample_request("15 Jun 2025\n\nRIFLE QUALIFICATION\n\nQualified."));
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"%%EOF"));
}

#[test]
fn page_count_matches_the_layout() {
    let bytes = generate_pdf(&sample_request(&numbered_lines(100)));
    assert!(contains(&bytes, b"/Count 3"));
}

#[test]
fn base14_fonts_are_registered_without_embedding() {
    let bytes = generate_pdf(&sample_request("Qualified."));
    assert!(contains(&bytes, b"/Courier"));
    assert!(contains(&bytes, b"/Courier-Bold"));
    assert!(contains(&bytes, b"/Helvetica"));
    assert!(contains(&bytes, b"/WinAnsiEncoding"));
    assert!(!contains(&bytes, b"/FontFile"));
}

#[test]
fn rendering_twice_yields_identical_bytes() {
    let req = sample_request(&numbered_lines(50));
    assert_eq!(generate_pdf(&req), generate_pdf(&req));
}

#[derive(Default)]
struct Recorder {
    pages: usize,
    draws_before_first_page: usize,
    events: Vec<String>,
}

impl Surface for Recorder {
    fn begin_page(&mut self, width: f32, height: f32) {
        self.pages += 1;
        self.events.push(format!("page {width}x{height}"));
    }

    fn text(&mut self, _x: f32, _y: f32, text: &str, _font: Font, _size: f32, _align: Align) {
        if self.pages == 0 {
            self.draws_before_first_page += 1;
        }
        self.events.push(format!("text {text}"));
    }

    fn line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, _width: f32) {
        if self.pages == 0 {
            self.draws_before_first_page += 1;
        }
        self.events.push("line".to_string());
    }

    fn rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _line_width: f32) {
        if self.pages == 0 {
            self.draws_before_first_page += 1;
        }
        self.events.push("rect".to_string());
    }
}

#[test]
fn replay_visits_pages_in_order_with_no_stray_draws() {
    let doc = layout::render(&sample_request(&numbered_lines(100)));
    let mut recorder = Recorder::default();
    replay(&doc, &mut recorder);

    assert_eq!(recorder.pages, doc.page_count());
    assert_eq!(recorder.draws_before_first_page, 0);

    // Each page replays as its page marker followed by that page's commands
    let markers: Vec<usize> = recorder
        .events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.starts_with("page "))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(markers.len(), doc.page_count());
    assert_eq!(markers[0], 0);
    for (page, window) in doc.pages.iter().zip(markers.windows(2)) {
        assert_eq!(window[1] - window[0] - 1, page.cmds.len());
    }
}

#[test]
fn pdf_surface_can_be_driven_directly() {
    let doc = layout::render(&sample_request("Qualified."));
    let mut surface = pdf::PdfSurface::new();
    replay(&doc, &mut surface);
    let bytes = surface.finish();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"/Count 1"));
}

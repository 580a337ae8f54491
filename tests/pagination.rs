mod common;

use common::{all_text, body_text_cmds, numbered_lines, sample_request};
use page_eleven::layout::{self, PageGeometry};
use page_eleven::model::{Align, DrawCmd};
use page_eleven::{IdentBlock, SkinId};

#[test]
fn short_entry_fits_on_one_page() {
    let doc = layout::render(&sample_request("15 Jun 2025\n\nRIFLE QUALIFICATION\n\nQualified."));
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn empty_entry_renders_a_single_blank_form_page() {
    let doc = layout::render(&sample_request(""));
    assert_eq!(doc.page_count(), 1);
    let texts = all_text(&doc.pages[0]);
    assert!(texts.contains(&"ADMINISTRATIVE REMARKS"));
    assert!(texts.contains(&"Page 1 of 1"));
    assert!(body_text_cmds(&doc.pages[0]).is_empty());
}

#[test]
fn tall_documents_flow_onto_additional_pages() {
    let doc = layout::render(&sample_request(&numbered_lines(60)));
    assert!(doc.page_count() >= 2, "got {} pages", doc.page_count());
}

#[test]
fn pagination_is_idempotent() {
    let req = sample_request(&numbered_lines(100));
    let a = layout::render(&req);
    let b = layout::render(&req);
    assert_eq!(a.page_count(), b.page_count());
    for (pa, pb) in a.pages.iter().zip(&b.pages) {
        assert_eq!(pa.cmds, pb.cmds);
        assert!(pa.deferred.is_empty() && pb.deferred.is_empty());
    }
}

#[test]
fn cursor_is_monotone_within_each_page() {
    let doc = layout::render(&sample_request(&numbered_lines(100)));
    for page in &doc.pages {
        let body = body_text_cmds(page);
        for pair in body.windows(2) {
            assert!(
                pair[1].1 >= pair[0].1,
                "page {}: y went backwards ({} after {})",
                page.number,
                pair[1].1,
                pair[0].1
            );
        }
    }
}

#[test]
fn no_body_line_crosses_the_footer_bound() {
    let geometry = PageGeometry::for_skin(SkinId::Rev2024);
    let doc = layout::render(&sample_request(&numbered_lines(150)));
    for page in &doc.pages {
        for (_, y, text) in body_text_cmds(page) {
            assert!(
                y + geometry.line_height <= geometry.footer_start_y + 0.01,
                "page {}: '{text}' at y={y} crosses the footer",
                page.number
            );
        }
    }
}

#[test]
fn pages_are_numbered_in_order() {
    let doc = layout::render(&sample_request(&numbered_lines(100)));
    for (idx, page) in doc.pages.iter().enumerate() {
        assert_eq!(page.number, idx + 1);
    }
}

#[test]
fn footers_read_page_i_of_n_after_finalization() {
    // 100 body lines span exactly three Rev2024 pages
    let doc = layout::render(&sample_request(&numbered_lines(100)));
    assert_eq!(doc.page_count(), 3);
    for page in &doc.pages {
        let expected = format!("Page {} of 3", page.number);
        let texts = all_text(page);
        assert!(
            texts.contains(&expected.as_str()),
            "page {} footer missing '{expected}'",
            page.number
        );
    }
}

#[test]
fn blank_lines_consume_a_fractional_line_height() {
    let geometry = PageGeometry::for_skin(SkinId::Rev2024);
    let doc = layout::render(&sample_request("first remark line\n\nsecond remark line"));
    let body = body_text_cmds(&doc.pages[0]);
    assert_eq!(body.len(), 2);
    let gap = body[1].1 - body[0].1;
    let expected = geometry.line_height * (1.0 + geometry.blank_line_factor);
    assert!(
        (gap - expected).abs() < 0.01,
        "blank separator advanced {gap} instead of {expected}"
    );
}

#[test]
fn signature_lines_are_right_aligned_to_the_anchor() {
    let geometry = PageGeometry::for_skin(SkinId::Rev2024);
    let entry = "Qualified this date.\n\n_______________________\n[Marine's Signature]";
    let doc = layout::render(&sample_request(entry));
    let signatures: Vec<&DrawCmd> = doc.pages[0]
        .cmds
        .iter()
        .filter(|c| {
            matches!(c, DrawCmd::Text { text, .. }
                if text.contains("___") || text.contains("[Marine"))
        })
        .collect();
    assert_eq!(signatures.len(), 2);
    for cmd in signatures {
        let DrawCmd::Text { x, align, .. } = cmd else {
            unreachable!()
        };
        assert_eq!(*align, Align::Right);
        assert_eq!(*x, geometry.signature_anchor_x);
    }
}

#[test]
fn header_lines_render_bold() {
    use page_eleven::fonts::Font;
    let doc = layout::render(&sample_request("15 Jun 2025\n\nRIFLE QUALIFICATION\n\nQualified."));
    let header = doc.pages[0].cmds.iter().find_map(|c| match c {
        DrawCmd::Text { text, font, .. } if text == "RIFLE QUALIFICATION" => Some(*font),
        _ => None,
    });
    assert_eq!(header, Some(Font::CourierBold));
}

#[test]
fn continuation_pages_use_the_abbreviated_frame() {
    let doc = layout::render(&sample_request(&numbered_lines(60)));
    assert!(doc.page_count() >= 2);
    let first = all_text(&doc.pages[0]);
    let second = all_text(&doc.pages[1]);
    assert!(first.contains(&"UNITED STATES MARINE CORPS"));
    assert!(second.contains(&"ADMINISTRATIVE REMARKS (CONTINUED)"));
    assert!(!second.contains(&"UNITED STATES MARINE CORPS"));
}

#[test]
fn every_skin_paginates_the_same_entry_without_error() {
    for skin in [SkinId::Rev2024, SkinId::Rev2012, SkinId::Split] {
        let mut req = sample_request(&numbered_lines(80));
        req.skin = skin;
        req.ident = IdentBlock {
            name: "DOE, JOHN Q".to_string(),
            grade: "Cpl".to_string(),
            ssn_last4: "5678".to_string(),
        };
        let doc = layout::render(&req);
        assert!(doc.page_count() >= 2, "{skin:?}");
        for (idx, page) in doc.pages.iter().enumerate() {
            assert_eq!(page.number, idx + 1, "{skin:?}");
            assert!(page.deferred.is_empty(), "{skin:?}");
        }
    }
}

#[test]
fn pathological_token_is_placed_not_dropped() {
    // One unbroken token far wider than the content area still renders
    let token = "X".repeat(400);
    let doc = layout::render(&sample_request(&token));
    let body: String = doc
        .pages
        .iter()
        .flat_map(|p| body_text_cmds(p).into_iter().map(|(_, _, t)| t.to_string()))
        .collect();
    assert_eq!(body.len(), 400);
}

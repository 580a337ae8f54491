use page_eleven::IdentBlock;
use page_eleven::SkinId;
use page_eleven::layout::PageGeometry;
use page_eleven::model::DrawCmd;

const SKINS: [SkinId; 3] = [SkinId::Rev2024, SkinId::Rev2012, SkinId::Split];

#[test]
fn geometry_is_deterministic_per_skin() {
    for skin in SKINS {
        assert_eq!(
            PageGeometry::for_skin(skin),
            PageGeometry::for_skin(skin),
            "{skin:?} geometry must be a pure function of the skin"
        );
    }
}

#[test]
fn writable_band_is_sane_for_every_skin() {
    for skin in SKINS {
        let g = PageGeometry::for_skin(skin);
        assert!(g.content_width > 0.0, "{skin:?}");
        assert!(g.body_top < g.footer_start_y, "{skin:?}");
        assert!(g.continuation_body_top < g.footer_start_y, "{skin:?}");
        assert!(g.continuation_body_top <= g.body_top, "{skin:?}");
        assert!(g.footer_start_y <= g.page_height, "{skin:?}");
        assert!(g.signature_anchor_x <= g.page_width - g.margin_right, "{skin:?}");
        assert!(g.content_left + g.content_width <= g.page_width, "{skin:?}");
        // At least a dozen body lines must fit on a continuation page
        let usable = g.footer_start_y - g.continuation_body_top;
        assert!(usable / g.line_height >= 12.0, "{skin:?}");
    }
}

#[test]
fn rev2024_has_three_identification_boxes() {
    let g = PageGeometry::for_skin(SkinId::Rev2024);
    let frame = g.first_page_frame(&IdentBlock::default());
    let rects = frame
        .iter()
        .filter(|c| matches!(c, DrawCmd::Rect { .. }))
        .count();
    assert_eq!(rects, 3);
}

#[test]
fn rev2012_has_two_identification_boxes() {
    let g = PageGeometry::for_skin(SkinId::Rev2012);
    let frame = g.first_page_frame(&IdentBlock::default());
    let rects = frame
        .iter()
        .filter(|c| matches!(c, DrawCmd::Rect { .. }))
        .count();
    assert_eq!(rects, 2);
}

#[test]
fn split_skin_draws_a_vertical_center_rule() {
    let g = PageGeometry::for_skin(SkinId::Split);
    let frame = g.first_page_frame(&IdentBlock::default());
    let has_center_rule = frame.iter().any(|c| {
        matches!(
            c,
            DrawCmd::Line { x1, y1, x2, y2, .. }
                if x1 == x2 && *x1 == g.page_width / 2.0 && y2 > y1
        )
    });
    assert!(has_center_rule);
    // Signature anchor hangs off the centerline, not the page edge
    assert!(g.signature_anchor_x < g.page_width / 2.0);
    // Body is confined to the left column
    assert!(g.content_left + g.content_width < g.page_width / 2.0);
}

#[test]
fn identification_values_are_stamped_into_their_boxes() {
    let g = PageGeometry::for_skin(SkinId::Rev2024);
    let ident = IdentBlock {
        name: "DOE, JOHN Q".to_string(),
        grade: "Sgt".to_string(),
        ssn_last4: "1234".to_string(),
    };
    let texts: Vec<String> = g
        .first_page_frame(&ident)
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert!(texts.iter().any(|t| t == "DOE, JOHN Q"));
    assert!(texts.iter().any(|t| t == "Sgt"));
    assert!(texts.iter().any(|t| t == "XXX-XX-1234"));
}

#[test]
fn blank_identification_leaves_boxes_empty() {
    let g = PageGeometry::for_skin(SkinId::Rev2024);
    let with_blank = g.first_page_frame(&IdentBlock::default()).len();
    let with_name = g
        .first_page_frame(&IdentBlock {
            name: "DOE, JOHN Q".to_string(),
            ..IdentBlock::default()
        })
        .len();
    assert_eq!(with_name, with_blank + 1);
}

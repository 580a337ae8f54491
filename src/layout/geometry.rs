//! Fixed page geometry per form revision ("skin"). A skin is data: page
//! dimensions, margins, the writable band for entry text, and three static
//! decoration sets (first-page frame, continuation frame, footer frame)
//! expressed as absolute-coordinate draw commands. The pagination engine
//! never branches on the skin id: everything it needs is in this value.
//!
//! Coordinates follow the logical convention of the whole layout core:
//! origin at the top-left page corner, y growing downward, units in points.

use crate::fonts::Font;
use crate::model::{Align, DrawCmd, IdentBlock, PageField, PageFieldKind, SkinId};

/// Anchor for one dynamically stamped identification value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextAnchor {
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentSlot {
    Name,
    Grade,
    Ssn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageGeometry {
    pub skin: SkinId,
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,

    pub body_font: Font,
    pub body_size: f32,
    pub line_height: f32,
    /// Fraction of a line height a blank separator consumes.
    pub blank_line_factor: f32,

    /// Left edge of the writable band (column-aware for `Split`).
    pub content_left: f32,
    /// Maximum wrap width for body text.
    pub content_width: f32,
    /// Body text inset from `content_left`.
    pub body_indent: f32,
    /// Right-aligned signature lines anchor here.
    pub signature_anchor_x: f32,

    /// Body start on the first page, below the full form header.
    pub body_top: f32,
    /// Body start on continuation pages, below the abbreviated header.
    pub continuation_body_top: f32,
    /// Content must stay strictly above this line.
    pub footer_start_y: f32,

    first_page_frame: Vec<DrawCmd>,
    continuation_frame: Vec<DrawCmd>,
    footer_frame: Vec<DrawCmd>,
    ident_anchors: Vec<(IdentSlot, TextAnchor)>,
    footer_fields: Vec<PageField>,
}

impl PageGeometry {
    pub fn for_skin(skin: SkinId) -> PageGeometry {
        match skin {
            SkinId::Rev2024 => rev2024(),
            SkinId::Rev2012 => rev2012(),
            SkinId::Split => split(),
        }
    }

    /// Full form header for page one, with the identification values filled
    /// into their boxes. Empty values leave their box blank.
    pub fn first_page_frame(&self, ident: &IdentBlock) -> Vec<DrawCmd> {
        let mut cmds = self.first_page_frame.clone();
        for &(slot, anchor) in &self.ident_anchors {
            let value = match slot {
                IdentSlot::Name => ident.name.clone(),
                IdentSlot::Grade => ident.grade.clone(),
                IdentSlot::Ssn => masked_ssn(&ident.ssn_last4),
            };
            if value.is_empty() {
                continue;
            }
            cmds.push(DrawCmd::Text {
                x: anchor.x,
                y: anchor.y,
                text: value,
                font: anchor.font,
                size: anchor.size,
                align: Align::Left,
            });
        }
        cmds
    }

    /// Abbreviated header for continuation pages.
    pub fn continuation_frame(&self) -> Vec<DrawCmd> {
        self.continuation_frame.clone()
    }

    /// Append the static footer decorations and the deferred footer fields to
    /// a page's command set.
    pub fn stamp_footer(&self, cmds: &mut Vec<DrawCmd>, deferred: &mut Vec<PageField>) {
        cmds.extend(self.footer_frame.iter().cloned());
        deferred.extend(self.footer_fields.iter().cloned());
    }
}

fn masked_ssn(last4: &str) -> String {
    if last4.is_empty() {
        String::new()
    } else {
        format!("XXX-XX-{last4}")
    }
}

fn text(x: f32, y: f32, s: &str, font: Font, size: f32, align: Align) -> DrawCmd {
    DrawCmd::Text {
        x,
        y,
        text: s.to_string(),
        font,
        size,
        align,
    }
}

fn hline(x1: f32, x2: f32, y: f32, width: f32) -> DrawCmd {
    DrawCmd::Line {
        x1,
        y1: y,
        x2,
        y2: y,
        width,
    }
}

fn boxed(x: f32, y: f32, w: f32, h: f32, line_width: f32) -> DrawCmd {
    DrawCmd::Rect {
        x,
        y,
        w,
        h,
        line_width,
    }
}

/// Current revision of the form: three identification boxes, a titled
/// remarks section, and a full footer (form number / page count / date).
fn rev2024() -> PageGeometry {
    let (pw, ph) = (612.0, 792.0);
    let (ml, mr, mt, mb) = (54.0, 54.0, 54.0, 72.0);
    let cw = pw - ml - mr;
    let center = pw / 2.0;
    let right = pw - mr;

    let mut frame = vec![
        text(ml, mt - 15.0, "NAVMC 118(11) (REV. 12-2024)", Font::Helvetica, 8.0, Align::Left),
        text(
            right,
            mt - 15.0,
            "PRIVACY ACT STATEMENT: Authority 5 U.S.C. 301",
            Font::Helvetica,
            6.0,
            Align::Right,
        ),
        text(center, mt, "UNITED STATES MARINE CORPS", Font::HelveticaBold, 10.0, Align::Center),
        text(center, mt + 16.0, "ADMINISTRATIVE REMARKS", Font::HelveticaBold, 14.0, Align::Center),
        text(
            center,
            mt + 26.0,
            "(Page 11 of the Service Record)",
            Font::Helvetica,
            8.0,
            Align::Center,
        ),
    ];

    // Identification block: name / grade / SSN boxes with small labels
    let box_y = mt + 41.0;
    let box_h = 30.0;
    let col1 = 260.0;
    let col2 = 100.0;
    let col3 = cw - col1 - col2;
    frame.extend([
        boxed(ml, box_y, col1, box_h, 0.75),
        boxed(ml + col1, box_y, col2, box_h, 0.75),
        boxed(ml + col1 + col2, box_y, col3, box_h, 0.75),
        text(
            ml + 2.0,
            box_y + 8.0,
            "1. NAME (Last, First, Middle Initial)",
            Font::Helvetica,
            6.0,
            Align::Left,
        ),
        text(ml + col1 + 2.0, box_y + 8.0, "2. GRADE", Font::Helvetica, 6.0, Align::Left),
        text(
            ml + col1 + col2 + 2.0,
            box_y + 8.0,
            "3. SSN (Last 4)",
            Font::Helvetica,
            6.0,
            Align::Left,
        ),
    ]);

    // Remarks section header between a heavy and a light rule
    let rule_y = box_y + box_h + 8.0;
    frame.extend([
        hline(ml, right, rule_y, 1.0),
        text(
            center,
            rule_y + 12.0,
            "4. CHRONOLOGICAL RECORD OF ADMINISTRATIVE REMARKS",
            Font::HelveticaBold,
            9.0,
            Align::Center,
        ),
        hline(ml, right, rule_y + 20.0, 0.5),
    ]);
    let body_top = rule_y + 35.0;

    let continuation = vec![
        text(ml, mt - 20.0, "NAVMC 118(11) (CONTINUATION)", Font::Helvetica, 8.0, Align::Left),
        text(
            center,
            mt - 5.0,
            "ADMINISTRATIVE REMARKS (CONTINUED)",
            Font::HelveticaBold,
            10.0,
            Align::Center,
        ),
        hline(ml, right, mt + 5.0, 0.5),
    ];

    let footer_y = ph - 40.0;
    let footer_frame = vec![
        hline(ml, right, footer_y - 10.0, 0.5),
        text(ml, footer_y, "NAVMC 118(11)", Font::Helvetica, 8.0, Align::Left),
    ];
    let footer_fields = vec![
        PageField {
            kind: PageFieldKind::PageOfTotal,
            x: center,
            y: footer_y,
            font: Font::Helvetica,
            size: 8.0,
            align: Align::Center,
        },
        PageField {
            kind: PageFieldKind::GeneratedOn,
            x: right,
            y: footer_y,
            font: Font::Helvetica,
            size: 8.0,
            align: Align::Right,
        },
    ];

    let value_font = Font::CourierBold;
    let ident_anchors = vec![
        (IdentSlot::Name, TextAnchor { x: ml + 4.0, y: box_y + 22.0, font: value_font, size: 11.0 }),
        (IdentSlot::Grade, TextAnchor { x: ml + col1 + 4.0, y: box_y + 22.0, font: value_font, size: 11.0 }),
        (IdentSlot::Ssn, TextAnchor { x: ml + col1 + col2 + 4.0, y: box_y + 22.0, font: value_font, size: 11.0 }),
    ];

    PageGeometry {
        skin: SkinId::Rev2024,
        page_width: pw,
        page_height: ph,
        margin_left: ml,
        margin_right: mr,
        margin_top: mt,
        margin_bottom: mb,
        body_font: Font::Courier,
        body_size: 11.0,
        line_height: 14.0,
        blank_line_factor: 0.6,
        content_left: ml,
        content_width: cw - 10.0,
        body_indent: 5.0,
        signature_anchor_x: right - 10.0,
        body_top,
        continuation_body_top: mt + 20.0,
        footer_start_y: ph - mb,
        first_page_frame: frame,
        continuation_frame: continuation,
        footer_frame,
        ident_anchors,
        footer_fields,
    }
}

/// Prior revision: 1" side margins, two identification boxes (no grade),
/// smaller typewriter face, identification repeated in a plain footer.
fn rev2012() -> PageGeometry {
    let (pw, ph) = (612.0, 792.0);
    let (ml, mr, mt, mb) = (72.0, 72.0, 48.0, 60.0);
    let cw = pw - ml - mr;
    let center = pw / 2.0;
    let right = pw - mr;

    let box_y = mt + 32.0;
    let box_h = 28.0;
    let name_w = 300.0;
    let frame = vec![
        text(ml, mt - 12.0, "NAVMC 118(11) (REV. 3-2012)", Font::Helvetica, 8.0, Align::Left),
        text(center, mt, "UNITED STATES MARINE CORPS", Font::HelveticaBold, 10.0, Align::Center),
        text(center, mt + 16.0, "ADMINISTRATIVE REMARKS", Font::HelveticaBold, 14.0, Align::Center),
        boxed(ml, box_y, name_w, box_h, 0.75),
        boxed(ml + name_w, box_y, cw - name_w, box_h, 0.75),
        text(
            ml + 2.0,
            box_y + 8.0,
            "NAME (Last, First, Middle Initial)",
            Font::Helvetica,
            6.0,
            Align::Left,
        ),
        text(ml + name_w + 2.0, box_y + 8.0, "SSN", Font::Helvetica, 6.0, Align::Left),
        hline(ml, right, box_y + box_h + 8.0, 0.75),
    ];
    let body_top = box_y + box_h + 22.0;

    let continuation = vec![
        text(ml, mt - 18.0, "NAVMC 118(11) (CONTINUATION)", Font::Helvetica, 8.0, Align::Left),
        hline(ml, right, mt - 8.0, 0.5),
    ];

    let footer_y = ph - 42.0;
    let footer_frame = vec![hline(ml, right, footer_y - 10.0, 0.5)];
    let footer_fields = vec![
        PageField {
            kind: PageFieldKind::IdentLine,
            x: ml,
            y: footer_y,
            font: Font::Helvetica,
            size: 8.0,
            align: Align::Left,
        },
        PageField {
            kind: PageFieldKind::PageOfTotal,
            x: center,
            y: footer_y,
            font: Font::Helvetica,
            size: 8.0,
            align: Align::Center,
        },
    ];

    let ident_anchors = vec![
        (IdentSlot::Name, TextAnchor { x: ml + 4.0, y: box_y + 21.0, font: Font::CourierBold, size: 10.0 }),
        (IdentSlot::Ssn, TextAnchor { x: ml + name_w + 4.0, y: box_y + 21.0, font: Font::CourierBold, size: 10.0 }),
    ];

    PageGeometry {
        skin: SkinId::Rev2012,
        page_width: pw,
        page_height: ph,
        margin_left: ml,
        margin_right: mr,
        margin_top: mt,
        margin_bottom: mb,
        body_font: Font::Courier,
        body_size: 10.0,
        line_height: 13.0,
        blank_line_factor: 0.6,
        content_left: ml,
        content_width: cw - 10.0,
        body_indent: 5.0,
        signature_anchor_x: right - 10.0,
        body_top,
        continuation_body_top: mt + 8.0,
        footer_start_y: ph - mb,
        first_page_frame: frame,
        continuation_frame: continuation,
        footer_frame,
        ident_anchors,
        footer_fields,
    }
}

/// Two-column continuation sheet: a vertical center rule splits the page,
/// entries are typed into the left column, and signature lines hang off an
/// inset from the centerline. The rule is pure decoration — content never
/// reflows into the right column.
fn split() -> PageGeometry {
    let (pw, ph) = (612.0, 792.0);
    let (ml, mr, mt, mb) = (40.0, 40.0, 30.0, 52.0);
    let center = pw / 2.0;
    let right = pw - mr;
    let column_gap = 8.0;

    let rule_top = mt + 14.0;
    let footer_start = ph - mb;
    let frame = vec![
        text(ml, mt, "NAVMC 118(11)", Font::Helvetica, 7.0, Align::Left),
        text(
            center,
            mt,
            "ADMINISTRATIVE REMARKS (CONTINUATION SHEET)",
            Font::HelveticaBold,
            10.0,
            Align::Center,
        ),
        hline(ml, right, mt + 8.0, 0.75),
        DrawCmd::Line {
            x1: center,
            y1: rule_top,
            x2: center,
            y2: footer_start,
            width: 0.5,
        },
    ];
    let body_top = rule_top + 6.0;

    let footer_y = ph - 30.0;
    let footer_frame = vec![hline(ml, right, footer_y - 10.0, 0.5)];
    let footer_fields = vec![
        PageField {
            kind: PageFieldKind::IdentLine,
            x: ml,
            y: footer_y,
            font: Font::Helvetica,
            size: 7.0,
            align: Align::Left,
        },
        PageField {
            kind: PageFieldKind::PageOfTotal,
            x: center,
            y: footer_y,
            font: Font::Helvetica,
            size: 7.0,
            align: Align::Center,
        },
        PageField {
            kind: PageFieldKind::GeneratedOn,
            x: right,
            y: footer_y,
            font: Font::Helvetica,
            size: 7.0,
            align: Align::Right,
        },
    ];

    let column_width = center - column_gap - ml;

    PageGeometry {
        skin: SkinId::Split,
        page_width: pw,
        page_height: ph,
        margin_left: ml,
        margin_right: mr,
        margin_top: mt,
        margin_bottom: mb,
        body_font: Font::Courier,
        body_size: 9.0,
        line_height: 12.0,
        blank_line_factor: 0.6,
        content_left: ml,
        content_width: column_width - 8.0,
        body_indent: 4.0,
        signature_anchor_x: center - 14.0,
        body_top,
        continuation_body_top: body_top,
        footer_start_y: footer_start,
        // Every page of a continuation sheet carries the same frame
        continuation_frame: frame.clone(),
        first_page_frame: frame,
        footer_frame,
        ident_anchors: Vec::new(),
        footer_fields,
    }
}

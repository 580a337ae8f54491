//! Document assembly: splits the entry text into logical lines, classifies
//! and wraps them, drives the pagination engine, and finalizes the per-page
//! footer fields once the total page count is known.

pub mod classify;
pub mod geometry;
pub mod paginate;
pub mod wrap;

use time::Date;

use crate::dates;
use crate::model::{
    DrawCmd, IdentBlock, LogicalLine, PageCommandSet, PageFieldKind, RenderRequest,
    RenderedDocument, Role, WrappedLine,
};

pub use classify::classify;
pub use geometry::PageGeometry;
pub use paginate::{Cursor, Paginator, paginate};
pub use wrap::wrap_to_width;

/// Lay out one entry onto form pages. Never fails: empty or whitespace-only
/// text produces a single mostly-blank page.
pub fn render(req: &RenderRequest) -> RenderedDocument {
    let geometry = PageGeometry::for_skin(req.skin);

    if req.entry_text.trim().is_empty() {
        log::warn!("entry text is empty; rendering a blank form page");
    }

    let logical = split_lines(&req.entry_text);
    let wrapped = wrap_lines(&logical, &geometry);

    let mut pages = paginate(&wrapped, &geometry, &req.ident, geometry.line_height);

    // Close the last page, then resolve every deferred footer field now that
    // the page count is final.
    if let Some(last) = pages.last_mut() {
        geometry.stamp_footer(&mut last.cmds, &mut last.deferred);
    }
    finalize(&mut pages, &req.ident, req.generated_on);

    log::debug!(
        "laid out {} logical lines onto {} page(s) ({:?})",
        logical.len(),
        pages.len(),
        req.skin,
    );

    RenderedDocument {
        skin: req.skin,
        page_width: geometry.page_width,
        page_height: geometry.page_height,
        pages,
    }
}

/// Split entry text on newlines, preserving empty lines, and assign roles.
pub fn split_lines(entry_text: &str) -> Vec<LogicalLine> {
    entry_text
        .split('\n')
        .enumerate()
        .map(|(idx, raw)| LogicalLine {
            text: raw.to_string(),
            role: classify(raw, idx),
        })
        .collect()
}

fn wrap_lines(logical: &[LogicalLine], geometry: &PageGeometry) -> Vec<WrappedLine> {
    logical
        .iter()
        .map(|line| {
            let physical = if line.role == Role::Blank {
                vec![String::new()]
            } else {
                // Every role goes through the same wrapper; signature lines
                // only split if they literally exceed the content width.
                wrap_to_width(
                    line.text.trim(),
                    geometry.body_font,
                    geometry.body_size,
                    geometry.content_width,
                )
            };
            WrappedLine {
                role: line.role,
                physical,
            }
        })
        .collect()
}

fn finalize(pages: &mut [PageCommandSet], ident: &IdentBlock, generated_on: Date) {
    let total = pages.len();
    for page in pages.iter_mut() {
        let number = page.number;
        for field in std::mem::take(&mut page.deferred) {
            let text = match field.kind {
                PageFieldKind::PageOfTotal => format!("Page {number} of {total}"),
                PageFieldKind::IdentLine => ident_line(ident),
                PageFieldKind::GeneratedOn => {
                    format!("Generated: {}", dates::format_military(generated_on))
                }
            };
            if text.is_empty() {
                continue;
            }
            page.cmds.push(DrawCmd::Text {
                x: field.x,
                y: field.y,
                text,
                font: field.font,
                size: field.size,
                align: field.align,
            });
        }
    }
}

fn ident_line(ident: &IdentBlock) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !ident.name.is_empty() {
        parts.push(&ident.name);
    }
    let masked;
    if !ident.ssn_last4.is_empty() {
        masked = format!("XXX-XX-{}", ident.ssn_last4);
        parts.push(&masked);
    }
    parts.join(" / ")
}

const FILENAME_STEM_MAX: usize = 25;

/// Suggested export filename: a fixed form prefix, the sanitized document
/// name, and a compact date, e.g. `NAVMC-118-11_6105-counseling_20250615.pdf`.
pub fn suggested_filename(doc_name: &str, date: Date) -> String {
    let mut slug = String::new();
    let mut pending_sep = false;
    for ch in doc_name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("entry");
    }
    slug.truncate(FILENAME_STEM_MAX);
    while slug.ends_with('-') {
        slug.pop();
    }
    format!("NAVMC-118-11_{}_{}.pdf", slug, dates::format_numeric(date))
}

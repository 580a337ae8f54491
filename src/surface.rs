//! The drawing-primitive seam between the layout core and any rendering
//! backend. The core only ever produces [`DrawCmd`](crate::model::DrawCmd)
//! data; `replay` pushes a finalized document through this trait in page
//! order, command order. A test double that records calls is enough to
//! exercise the whole pipeline without a PDF library in sight.

use crate::fonts::Font;
use crate::model::{Align, DrawCmd, RenderedDocument};

pub trait Surface {
    /// Open the next page. Pages arrive strictly in increasing order.
    fn begin_page(&mut self, width: f32, height: f32);

    /// Place text with its anchor at `(x, y)` (top-left origin, y downward);
    /// `align` decides which side of the anchor the text extends from.
    fn text(&mut self, x: f32, y: f32, text: &str, font: Font, size: f32, align: Align);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32);

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, line_width: f32);
}

/// Drive a finalized document through a surface, preserving command order
/// (later paints occlude earlier ones on backends that paint in order).
pub fn replay<S: Surface>(doc: &RenderedDocument, surface: &mut S) {
    for page in &doc.pages {
        surface.begin_page(doc.page_width, doc.page_height);
        for cmd in &page.cmds {
            match cmd {
                DrawCmd::Text {
                    x,
                    y,
                    text,
                    font,
                    size,
                    align,
                } => surface.text(*x, *y, text, *font, *size, *align),
                DrawCmd::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    width,
                } => surface.line(*x1, *y1, *x2, *y2, *width),
                DrawCmd::Rect {
                    x,
                    y,
                    w,
                    h,
                    line_width,
                } => surface.rect(*x, *y, *w, *h, *line_width),
            }
        }
    }
}

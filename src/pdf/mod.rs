//! PDF backend for the drawing-primitive surface. Pages become Flate-
//! compressed content streams; the four base-14 faces are registered once as
//! Type1 fonts with WinAnsi encoding, so no font data is embedded and the
//! output stays small and deterministic.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::fonts::{Font, to_winansi_bytes};
use crate::model::{Align, RenderedDocument};
use crate::surface::{self, Surface};

const FONTS: [Font; 4] = [
    Font::Courier,
    Font::CourierBold,
    Font::Helvetica,
    Font::HelveticaBold,
];

struct PageStream {
    width: f32,
    height: f32,
    content: Content,
}

/// Accumulates content streams page by page; `finish` assembles the document.
pub struct PdfSurface {
    pages: Vec<PageStream>,
}

impl PdfSurface {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    fn current(&mut self) -> &mut PageStream {
        self.pages.last_mut().expect("begin_page before drawing")
    }

    pub fn finish(self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();

        let font_refs: Vec<(Font, Ref)> = FONTS
            .iter()
            .map(|&font| {
                let id = alloc();
                pdf.type1_font(id)
                    .base_font(Name(font.base_name().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
                (font, id)
            })
            .collect();

        let n = self.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        for (i, stream) in self.pages.into_iter().enumerate() {
            let raw = stream.content.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);

            let mut page = pdf.page(page_ids[i]);
            page.media_box(Rect::new(0.0, 0.0, stream.width, stream.height))
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (font, font_ref) in &font_refs {
                fonts.pair(Name(font.resource_name().as_bytes()), *font_ref);
            }
        }

        pdf.finish()
    }
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for PdfSurface {
    fn begin_page(&mut self, width: f32, height: f32) {
        self.pages.push(PageStream {
            width,
            height,
            content: Content::new(),
        });
    }

    fn text(&mut self, x: f32, y: f32, text: &str, font: Font, size: f32, align: Align) {
        let anchor_x = match align {
            Align::Left => x,
            Align::Center => x - font.width(text, size) / 2.0,
            Align::Right => x - font.width(text, size),
        };
        let page = self.current();
        let baseline = page.height - y;
        page.content
            .begin_text()
            .set_font(Name(font.resource_name().as_bytes()), size)
            .next_line(anchor_x, baseline)
            .show(Str(&to_winansi_bytes(text)))
            .end_text();
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        let page = self.current();
        let h = page.height;
        page.content
            .save_state()
            .set_line_width(width)
            .move_to(x1, h - y1)
            .line_to(x2, h - y2)
            .stroke()
            .restore_state();
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, line_width: f32) {
        let page = self.current();
        let page_h = page.height;
        page.content
            .save_state()
            .set_line_width(line_width)
            .rect(x, page_h - y - h, w, h)
            .stroke()
            .restore_state();
    }
}

/// Render a finalized document to PDF bytes.
pub fn render(doc: &RenderedDocument) -> Vec<u8> {
    let mut pdf_surface = PdfSurface::new();
    surface::replay(doc, &mut pdf_surface);
    pdf_surface.finish()
}

//! The pagination state machine. A `Paginator` walks the wrapped lines with a
//! vertical cursor, placing each physical line on the current page or flowing
//! to a fresh one, and emits per-page command sets with footer fields left
//! unresolved (total page count is unknown until the walk finishes).
//!
//! The engine holds no shared state: every render constructs its own
//! `Paginator`, so identical inputs always produce identical command
//! sequences and concurrent renders cannot interfere.

use crate::model::{Align, DrawCmd, IdentBlock, PageCommandSet, Role, WrappedLine};

use super::geometry::PageGeometry;

/// Mutable position of the engine during one render pass.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    /// 1-based page index.
    pub page: usize,
    /// Next baseline, in points from the page top.
    pub y: f32,
    /// Set while the page's frame decorations have not been emitted yet.
    pub frame_pending: bool,
}

pub struct Paginator<'a> {
    geometry: &'a PageGeometry,
    ident: &'a IdentBlock,
    line_height: f32,
    cursor: Cursor,
    done: Vec<PageCommandSet>,
    current: PageCommandSet,
}

impl<'a> Paginator<'a> {
    pub fn new(geometry: &'a PageGeometry, ident: &'a IdentBlock, line_height: f32) -> Self {
        Self {
            geometry,
            ident,
            line_height,
            cursor: Cursor {
                page: 1,
                y: geometry.body_top,
                frame_pending: true,
            },
            done: Vec::new(),
            current: PageCommandSet::new(1),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Place one wrapped logical line, breaking pages as needed.
    pub fn place(&mut self, line: &WrappedLine) {
        if line.role == Role::Blank {
            // Blank separators only advance the cursor; they never force a
            // page break themselves.
            self.cursor.y += self.line_height * self.geometry.blank_line_factor;
            return;
        }

        for physical in &line.physical {
            if self.cursor.y + self.line_height > self.geometry.footer_start_y {
                self.break_page();
            }
            self.ensure_frame();
            let cmd = self.text_cmd(line.role, physical);
            self.current.cmds.push(cmd);
            self.cursor.y += self.line_height;
        }
    }

    /// Consume the paginator. The last page is returned with its frame drawn
    /// but its footer unstamped — the assembler closes it once the total page
    /// count is known.
    pub fn into_pages(mut self) -> Vec<PageCommandSet> {
        self.ensure_frame();
        self.done.push(self.current);
        self.done
    }

    fn text_cmd(&self, role: Role, physical: &str) -> DrawCmd {
        let g = self.geometry;
        let (x, align, font) = match role {
            Role::Signature => (g.signature_anchor_x, Align::Right, g.body_font),
            Role::Header => (g.content_left + g.body_indent, Align::Left, g.body_font.bold()),
            _ => (g.content_left + g.body_indent, Align::Left, g.body_font),
        };
        DrawCmd::Text {
            x,
            y: self.cursor.y,
            text: physical.to_string(),
            font,
            size: g.body_size,
            align,
        }
    }

    fn ensure_frame(&mut self) {
        if !self.cursor.frame_pending {
            return;
        }
        let frame = if self.cursor.page == 1 {
            self.geometry.first_page_frame(self.ident)
        } else {
            self.geometry.continuation_frame()
        };
        // Frame is always emitted before any body text on the page, so body
        // paint lands on top of overlapping decor
        self.current.cmds.extend(frame);
        self.cursor.frame_pending = false;
    }

    fn break_page(&mut self) {
        self.ensure_frame();
        self.geometry
            .stamp_footer(&mut self.current.cmds, &mut self.current.deferred);
        let page = self.cursor.page + 1;
        self.done
            .push(std::mem::replace(&mut self.current, PageCommandSet::new(page)));
        self.cursor = Cursor {
            page,
            y: self.geometry.continuation_body_top,
            frame_pending: true,
        };
    }
}

/// Run the full state machine over a wrapped document.
pub fn paginate(
    lines: &[WrappedLine],
    geometry: &PageGeometry,
    ident: &IdentBlock,
    line_height: f32,
) -> Vec<PageCommandSet> {
    let mut paginator = Paginator::new(geometry, ident, line_height);
    for line in lines {
        paginator.place(line);
    }
    paginator.into_pages()
}

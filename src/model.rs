use std::str::FromStr;

use time::Date;

use crate::error::Error;
use crate::fonts::Font;

/// Presentation category assigned to one logical input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Body,
    Signature,
    Header,
    Blank,
}

/// One newline-delimited unit of input text, before wrapping.
#[derive(Clone, Debug)]
pub struct LogicalLine {
    pub text: String,
    pub role: Role,
}

/// A logical line broken into physical output strings, each fitting the
/// content width under the active font and size.
#[derive(Clone, Debug)]
pub struct WrappedLine {
    pub role: Role,
    pub physical: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One drawing primitive. Coordinates are in points from the top-left page
/// corner with y increasing downward; backends flip into their own space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Text {
        x: f32,
        y: f32,
        text: String,
        font: Font,
        size: f32,
        align: Align,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        line_width: f32,
    },
}

/// Footer text that cannot be resolved until the total page count is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageFieldKind {
    PageOfTotal,
    IdentLine,
    GeneratedOn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageField {
    pub kind: PageFieldKind,
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub size: f32,
    pub align: Align,
}

/// Ordered draw commands for one physical page, plus footer fields still
/// awaiting finalization. `deferred` is empty after the assembler's final pass.
#[derive(Clone, Debug)]
pub struct PageCommandSet {
    pub number: usize, // 1-based
    pub cmds: Vec<DrawCmd>,
    pub deferred: Vec<PageField>,
}

impl PageCommandSet {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            cmds: Vec::new(),
            deferred: Vec::new(),
        }
    }
}

/// Identification fields stamped into the form's fixed boxes.
#[derive(Clone, Debug, Default)]
pub struct IdentBlock {
    pub name: String,
    pub grade: String,
    pub ssn_last4: String,
}

/// One fixed physical-form layout the engine can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkinId {
    /// Current revision (REV. 12-2024): three identification boxes, full footer.
    Rev2024,
    /// Prior revision: 1" side margins, two identification boxes, plain footer.
    Rev2012,
    /// Two-column continuation sheet with a vertical center rule.
    Split,
}

impl FromStr for SkinId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "rev2024" => Ok(SkinId::Rev2024),
            "rev2012" => Ok(SkinId::Rev2012),
            "split" => Ok(SkinId::Split),
            _ => Err(Error::UnknownSkin(s.to_string())),
        }
    }
}

/// Everything one render invocation needs. The generation date is supplied by
/// the caller so rendering stays deterministic.
#[derive(Clone, Debug)]
pub struct RenderRequest {
    pub entry_text: String,
    pub ident: IdentBlock,
    pub doc_label: String,
    pub generated_on: Date,
    pub skin: SkinId,
}

/// Finalized multi-page output, ready for replay onto a drawing surface.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    pub skin: SkinId,
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<PageCommandSet>,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

use page_eleven::fonts::Font;
use page_eleven::model::{DrawCmd, PageCommandSet};
use page_eleven::{IdentBlock, RenderRequest, SkinId};
use time::macros::date;

/// A request with fixed date and blank identification, so frame decorations
/// contain no Courier text and body commands are easy to pick out.
pub fn sample_request(entry_text: &str) -> RenderRequest {
    RenderRequest {
        entry_text: entry_text.to_string(),
        ident: IdentBlock::default(),
        doc_label: "Test Entry".to_string(),
        generated_on: date!(2025 - 06 - 15),
        skin: SkinId::Rev2024,
    }
}

pub fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("remark line {i} of the entry"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body text commands of a page: everything set in the typewriter face.
/// (Frame labels and footers are Helvetica, so with a blank IdentBlock this
/// is exactly the entry content.)
pub fn body_text_cmds(page: &PageCommandSet) -> Vec<(f32, f32, &str)> {
    page.cmds
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Text {
                x, y, text, font, ..
            } if matches!(font, Font::Courier | Font::CourierBold) => {
                Some((*x, *y, text.as_str()))
            }
            _ => None,
        })
        .collect()
}

pub fn all_text<'a>(page: &'a PageCommandSet) -> Vec<&'a str> {
    page.cmds
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

//! Width-based line wrapping against the measured font tables. Greedy fill:
//! words are packed until the next one would cross `max_width`, and a single
//! token wider than the whole line is split at character boundaries so the
//! engine never has to reject input.

use crate::fonts::Font;

/// Wrap `text` into physical lines of at most `max_width` points.
/// Always returns at least one line (possibly empty). Deterministic:
/// re-wrapping any returned line reproduces it unchanged.
pub fn wrap_to_width(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_w = 0.0f32;
    let space_w = font.space_width(size);

    for word in text.split_whitespace() {
        let word_w = font.width(word, size);

        if !current.is_empty() {
            if current_w + space_w + word_w <= max_width {
                current.push(' ');
                current.push_str(word);
                current_w += space_w + word_w;
                continue;
            }
            lines.push(std::mem::take(&mut current));
            current_w = 0.0;
        }

        if word_w <= max_width {
            current.push_str(word);
            current_w = word_w;
        } else {
            let (rest, rest_w) = split_long_token(word, font, size, max_width, &mut lines);
            current = rest;
            current_w = rest_w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Push full-width chunks of an overlong token onto `lines`; the final
/// partial chunk is returned so following words can share its line. Each
/// chunk keeps at least one character, so a glyph wider than the line is
/// emitted as-is rather than dropped.
fn split_long_token(
    word: &str,
    font: Font,
    size: f32,
    max_width: f32,
    lines: &mut Vec<String>,
) -> (String, f32) {
    let mut rest = word;
    loop {
        let mut w = 0.0f32;
        let mut end = 0;
        for (i, ch) in rest.char_indices() {
            let cw = font.char_width_1000(ch) * size / 1000.0;
            if end > 0 && w + cw > max_width {
                break;
            }
            w += cw;
            end = i + ch.len_utf8();
        }
        if end >= rest.len() {
            return (rest.to_string(), w);
        }
        lines.push(rest[..end].to_string());
        rest = &rest[end..];
    }
}

use page_eleven::fonts::Font;
use page_eleven::layout::wrap_to_width;

const SIZE: f32 = 11.0;

// Courier advance at 11pt
const CHAR_W: f32 = 600.0 * SIZE / 1000.0;

#[test]
fn monospace_wrap_fidelity() {
    let text = "a".repeat(200);
    let max_width = 200.0;
    let lines = wrap_to_width(&text, Font::Courier, SIZE, max_width);

    let expected = (200.0 * CHAR_W / max_width).ceil() as usize;
    assert_eq!(lines.len(), expected);

    for line in &lines {
        assert!(Font::Courier.width(line, SIZE) <= max_width + 0.01);
    }
    // No characters lost
    assert_eq!(lines.concat(), text);
}

#[test]
fn wrapping_is_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog near the rifle range.";
    let a = wrap_to_width(text, Font::Courier, SIZE, 120.0);
    let b = wrap_to_width(text, Font::Courier, SIZE, 120.0);
    assert_eq!(a, b);
}

#[test]
fn rewrapping_a_wrapped_line_reproduces_it() {
    let text = "Counseled this date concerning deficient performance of duties and \
                the corrective action required to restore them.";
    let lines = wrap_to_width(text, Font::Courier, SIZE, 180.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert_eq!(wrap_to_width(line, Font::Courier, SIZE, 180.0), vec![line.clone()]);
    }
}

#[test]
fn words_are_never_reordered_or_dropped() {
    let text = "one two three four five six seven eight nine ten";
    let lines = wrap_to_width(text, Font::Helvetica, SIZE, 90.0);
    let rejoined = lines.join(" ");
    assert_eq!(rejoined, text);
}

#[test]
fn lines_fit_the_width() {
    let text = "Completed the Physical Fitness Test with a first class score and \
                demonstrated notable improvement over the previous cycle.";
    for max_width in [80.0, 130.0, 200.0, 494.0] {
        for line in wrap_to_width(text, Font::Courier, SIZE, max_width) {
            assert!(
                Font::Courier.width(&line, SIZE) <= max_width + 0.01,
                "line '{line}' exceeds {max_width}"
            );
        }
    }
}

#[test]
fn empty_input_yields_a_single_empty_line() {
    assert_eq!(wrap_to_width("", Font::Courier, SIZE, 100.0), vec![String::new()]);
    assert_eq!(wrap_to_width("   ", Font::Courier, SIZE, 100.0), vec![String::new()]);
}

#[test]
fn token_wider_than_line_splits_at_characters() {
    // 40 chars at 6.6pt each against a 100pt line: 15 chars fit per line
    let token = "x".repeat(40);
    let lines = wrap_to_width(&token, Font::Courier, SIZE, 100.0);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.concat(), token);
}

#[test]
fn glyph_wider_than_line_is_emitted_anyway() {
    // Narrower than a single Courier glyph: best effort, one char per line,
    // never an error or dropped content
    let lines = wrap_to_width("abc", Font::Courier, SIZE, 3.0);
    assert_eq!(lines, vec!["a", "b", "c"]);
}

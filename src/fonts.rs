//! Metrics for the base-14 faces the form is typeset in. Body text is Courier
//! (the form is typewriter-filled); frame labels and titles are Helvetica.
//! Widths are standard AFM advances in 1000-unit em space, so no font files
//! are read and text measurement is a pure table lookup.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    Courier,
    CourierBold,
    Helvetica,
    HelveticaBold,
}

const COURIER_ADVANCE: f32 = 600.0;

/// Fallback for characters outside the ASCII table.
const DEFAULT_ADVANCE: f32 = 556.0;

// Helvetica advances for 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [f32; 95] = [
    278.0, 278.0, 355.0, 556.0, 556.0, 889.0, 667.0, 191.0, // space ! " # $ % & '
    333.0, 333.0, 389.0, 584.0, 278.0, 333.0, 278.0, 278.0, // ( ) * + , - . /
    556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 556.0, // 0-7
    556.0, 556.0, 278.0, 278.0, 584.0, 584.0, 584.0, 556.0, // 8 9 : ; < = > ?
    1015.0, 667.0, 667.0, 722.0, 722.0, 667.0, 611.0, 778.0, // @ A-G
    722.0, 278.0, 500.0, 667.0, 556.0, 833.0, 722.0, 778.0, // H-O
    667.0, 778.0, 722.0, 667.0, 611.0, 722.0, 667.0, 944.0, // P-W
    667.0, 667.0, 611.0, 278.0, 278.0, 278.0, 469.0, 556.0, // X Y Z [ \ ] ^ _
    333.0, 556.0, 556.0, 500.0, 556.0, 556.0, 278.0, 556.0, // ` a-g
    556.0, 222.0, 222.0, 500.0, 222.0, 833.0, 556.0, 556.0, // h-o
    556.0, 556.0, 333.0, 500.0, 278.0, 556.0, 500.0, 722.0, // p-w
    500.0, 500.0, 500.0, 334.0, 260.0, 334.0, 584.0, // x y z { | } ~
];

// Helvetica-Bold advances for 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [f32; 95] = [
    278.0, 333.0, 474.0, 556.0, 556.0, 889.0, 722.0, 238.0, // space ! " # $ % & '
    333.0, 333.0, 389.0, 584.0, 278.0, 333.0, 278.0, 278.0, // ( ) * + , - . /
    556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 556.0, // 0-7
    556.0, 556.0, 333.0, 333.0, 584.0, 584.0, 584.0, 611.0, // 8 9 : ; < = > ?
    975.0, 722.0, 722.0, 722.0, 722.0, 667.0, 611.0, 778.0, // @ A-G
    722.0, 278.0, 556.0, 722.0, 611.0, 833.0, 722.0, 778.0, // H-O
    667.0, 778.0, 722.0, 667.0, 611.0, 722.0, 667.0, 944.0, // P-W
    667.0, 667.0, 611.0, 333.0, 278.0, 333.0, 584.0, 556.0, // X Y Z [ \ ] ^ _
    333.0, 556.0, 611.0, 556.0, 611.0, 556.0, 333.0, 611.0, // ` a-g
    611.0, 278.0, 278.0, 556.0, 278.0, 889.0, 611.0, 611.0, // h-o
    611.0, 611.0, 389.0, 556.0, 333.0, 611.0, 556.0, 778.0, // p-w
    556.0, 556.0, 500.0, 389.0, 280.0, 389.0, 584.0, // x y z { | } ~
];

impl Font {
    /// PostScript base font name as registered in the PDF.
    pub fn base_name(self) -> &'static str {
        match self {
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            Font::Courier => "F1",
            Font::CourierBold => "F2",
            Font::Helvetica => "F3",
            Font::HelveticaBold => "F4",
        }
    }

    pub fn bold(self) -> Font {
        match self {
            Font::Courier => Font::CourierBold,
            Font::Helvetica => Font::HelveticaBold,
            other => other,
        }
    }

    /// Advance width of one character in 1000-unit em space.
    pub fn char_width_1000(self, ch: char) -> f32 {
        match self {
            Font::Courier | Font::CourierBold => COURIER_ADVANCE,
            Font::Helvetica => ascii_width(&HELVETICA_WIDTHS, ch),
            Font::HelveticaBold => ascii_width(&HELVETICA_BOLD_WIDTHS, ch),
        }
    }

    /// Measured width of a string at the given size, in points.
    pub fn width(self, text: &str, size: f32) -> f32 {
        match self {
            // Monospace shortcut: chars × fixed advance
            Font::Courier | Font::CourierBold => {
                text.chars().count() as f32 * COURIER_ADVANCE * size / 1000.0
            }
            _ => {
                text.chars()
                    .map(|ch| self.char_width_1000(ch))
                    .sum::<f32>()
                    * size
                    / 1000.0
            }
        }
    }

    pub fn space_width(self, size: f32) -> f32 {
        self.char_width_1000(' ') * size / 1000.0
    }
}

/// Lossy WinAnsi encoding: Latin-1 passthrough, everything else becomes '?'.
/// The form's templates are plain ASCII, so this only matters for pasted-in
/// free text.
pub(crate) fn to_winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            if code <= 0xFF { code as u8 } else { b'?' }
        })
        .collect()
}

fn ascii_width(table: &[f32; 95], ch: char) -> f32 {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        DEFAULT_ADVANCE
    }
}

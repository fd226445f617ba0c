//! Built-in font faces and their glyph widths
//!
//! Widths are the Adobe core font metrics for printable ASCII, in 1/1000 em.
//! Oblique shares the regular widths. Bytes outside ASCII fall back to the
//! digit width, which is close enough for layout of the occasional accent.

/// Millimetres per PDF point
pub(crate) const MM_PER_PT: f64 = 25.4 / 72.0;

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Built-in font face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Italic,
}

impl Font {
    pub(crate) const ALL: [Font; 3] = [Font::Regular, Font::Bold, Font::Italic];

    /// Resource name used inside content streams
    pub(crate) fn resource(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Italic => "F3",
        }
    }

    /// PostScript name of the base font
    pub(crate) fn base_font(&self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Italic => "Helvetica-Oblique",
        }
    }

    /// Width of one WinAnsi byte in 1/1000 em
    pub fn glyph_width(&self, byte: u8) -> u16 {
        let table = match self {
            Font::Bold => &HELVETICA_BOLD,
            Font::Regular | Font::Italic => &HELVETICA,
        };
        match byte {
            32..=126 => table[(byte - 32) as usize],
            _ => FALLBACK_WIDTH,
        }
    }
}

/// Width of already-encoded text in millimetres
pub fn text_width(font: Font, size_pt: f64, bytes: &[u8]) -> f64 {
    let units: u32 = bytes.iter().map(|&b| u32::from(font.glyph_width(b))).sum();
    f64::from(units) * size_pt / 1000.0 * MM_PER_PT
}

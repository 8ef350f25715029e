use crate::units::Pt;

/// One of the PDF standard-14 Helvetica faces. These fonts are built into every PDF
/// reader, so they are referenced by name and never embedded; the trade off is that
/// text is limited to what the WinAnsi encoding can express. Characters outside of it
/// are rendered (and measured) as `?`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl Font {
    /// Every font a document may reference, in resource order
    pub const ALL: [Font; 4] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaOblique,
        Font::HelveticaBoldOblique,
    ];

    /// The `/BaseFont` name of the font
    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Index of the font within [`Font::ALL`], used for the `/F{index}` page resource name
    pub fn index(&self) -> usize {
        match self {
            Font::Helvetica => 0,
            Font::HelveticaBold => 1,
            Font::HelveticaOblique => 2,
            Font::HelveticaBoldOblique => 3,
        }
    }

    fn is_bold(&self) -> bool {
        matches!(self, Font::HelveticaBold | Font::HelveticaBoldOblique)
    }

    /// The advance width of a WinAnsi character code, in 1/1000 of an em
    pub fn code_width(&self, code: u8) -> u16 {
        let table = if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        let high = if self.is_bold() {
            &HELVETICA_BOLD_HIGH_WIDTHS
        } else {
            &HELVETICA_HIGH_WIDTHS
        };
        match code {
            32..=126 => table[(code - 32) as usize],
            0x80..=0xFF => high[(code - 0x80) as usize],
            // control codes never reach a content stream, see `win_ansi_code`
            _ => 278,
        }
    }
}

/// Map a character onto its WinAnsi code, substituting `?` for anything the encoding
/// cannot express. Control characters are substituted as well.
pub fn win_ansi_code(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        '\u{A0}'..='\u{FF}' => ch as u32 as u8,
        _ => b'?',
    }
}

/// Encode a string for a `Tj` operator against a WinAnsi-encoded simple font
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_code).collect()
}

/// Measures rendered text. Layout only ever asks a measurer for widths; heights come
/// from the font size and the line spacing multiplier.
///
/// Implementations must be pure: the same inputs always produce the same width.
pub trait Measurer {
    /// Calculate the width of a given string of text given the font and font size
    fn width_of_text(&self, text: &str, font: Font, size: Pt) -> Pt;
}

impl<M: Measurer + ?Sized> Measurer for &M {
    fn width_of_text(&self, text: &str, font: Font, size: Pt) -> Pt {
        (**self).width_of_text(text, font, size)
    }
}

/// Measures text using the Adobe font metrics of the standard Helvetica faces, which is
/// exactly how a PDF reader will advance the glyphs of [`Font`]
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardMetrics;

impl Measurer for StandardMetrics {
    fn width_of_text(&self, text: &str, font: Font, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| font.code_width(win_ansi_code(ch)) as u32)
            .sum();
        size * (units as f32 / 1000.0)
    }
}

/// The faces a document is rendered with. Passed by value into each export so no two
/// exports ever share font state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FontSet {
    pub regular: Font,
    pub bold: Font,
    pub italic: Font,
}

impl Default for FontSet {
    fn default() -> Self {
        FontSet {
            regular: Font::Helvetica,
            bold: Font::HelveticaBold,
            italic: Font::HelveticaOblique,
        }
    }
}

// advance widths for WinAnsi codes 32..=126
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

// advance widths for WinAnsi codes 0x80..=0xFF; codes WinAnsi leaves undefined get 278
#[rustfmt::skip]
const HELVETICA_HIGH_WIDTHS: [u16; 128] = [
    556, 278, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 278, 611, 278,
    278, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 278, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_HIGH_WIDTHS: [u16; 128] = [
    556, 278, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 278, 611, 278,
    278, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 278, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

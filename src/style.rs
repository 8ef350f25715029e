//! The fixed look of an exported note.
//!
//! Everything here is decided at compile time; [`NoteStyle::default`] bundles the
//! constants into one immutable value that is handed to each export.

use crate::colour::{colours, Colour};
use crate::font::FontSet;
use crate::layout::TextStyle;
use crate::units::Pt;

macro_rules! rgb {
    ($r:literal, $g:literal, $b:literal) => {
        Colour::RGB {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
        }
    };
}

/// #1A5276, titles and section headings
pub const HEADER_TEXT_COLOR: Colour = rgb!(0x1A, 0x52, 0x76);
/// #5D6D7E, field labels, placeholders, and the footer
pub const LABEL_TEXT_COLOR: Colour = rgb!(0x5D, 0x6D, 0x7E);
/// #27AE60
pub const CERTIFIED_COLOR: Colour = rgb!(0x27, 0xAE, 0x60);
/// #E8F4F8
pub const TABLE_HEADER_BG: Colour = rgb!(0xE8, 0xF4, 0xF8);
/// #BDC3C7, table borders and the footer rule
pub const BORDER_COLOR: Colour = rgb!(0xBD, 0xC3, 0xC7);

pub const TITLE_FONT_SIZE: Pt = Pt(18.0);
pub const SECTION_HEADER_FONT_SIZE: Pt = Pt(13.0);
pub const BODY_FONT_SIZE: Pt = Pt(11.0);
pub const SMALL_FONT_SIZE: Pt = Pt(10.0);
pub const FOOTER_FONT_SIZE: Pt = Pt(9.0);

/// Space above each section heading
pub const SECTION_SPACING: Pt = Pt(20.0);
/// Space after a paragraph or table
pub const PARAGRAPH_SPACING: Pt = Pt(12.0);
/// Baseline-to-baseline distance as a multiple of the font size
pub const LINE_SPACING_MULTIPLIER: f32 = 1.4;

/// Fonts, colours, sizes, and spacing for one export
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NoteStyle {
    pub fonts: FontSet,

    pub text_colour: Colour,
    pub header_colour: Colour,
    pub label_colour: Colour,
    pub certified_colour: Colour,
    pub table_header_bg: Colour,
    pub border_colour: Colour,

    pub title_size: Pt,
    pub section_size: Pt,
    pub body_size: Pt,
    pub small_size: Pt,
    pub footer_size: Pt,

    pub section_spacing: Pt,
    pub paragraph_spacing: Pt,
}

impl Default for NoteStyle {
    fn default() -> Self {
        NoteStyle {
            fonts: FontSet::default(),
            text_colour: colours::BLACK,
            header_colour: HEADER_TEXT_COLOR,
            label_colour: LABEL_TEXT_COLOR,
            certified_colour: CERTIFIED_COLOR,
            table_header_bg: TABLE_HEADER_BG,
            border_colour: BORDER_COLOR,
            title_size: TITLE_FONT_SIZE,
            section_size: SECTION_HEADER_FONT_SIZE,
            body_size: BODY_FONT_SIZE,
            small_size: SMALL_FONT_SIZE,
            footer_size: FOOTER_FONT_SIZE,
            section_spacing: SECTION_SPACING,
            paragraph_spacing: PARAGRAPH_SPACING,
        }
    }
}

impl NoteStyle {
    pub fn title(&self) -> TextStyle {
        TextStyle::new(self.fonts.bold, self.title_size, self.header_colour)
    }

    pub fn certification(&self) -> TextStyle {
        TextStyle::new(self.fonts.italic, self.small_size, self.certified_colour)
    }

    pub fn heading(&self) -> TextStyle {
        TextStyle::new(self.fonts.bold, self.section_size, self.header_colour)
    }

    pub fn label(&self) -> TextStyle {
        TextStyle::new(self.fonts.bold, self.body_size, self.label_colour)
    }

    pub fn body(&self) -> TextStyle {
        TextStyle::new(self.fonts.regular, self.body_size, self.text_colour)
    }

    /// A bold line of body text in the normal text colour, e.g. a list entry name
    pub fn emphasis(&self) -> TextStyle {
        TextStyle::new(self.fonts.bold, self.body_size, self.text_colour)
    }

    /// Stand-in text for a missing value
    pub fn placeholder(&self) -> TextStyle {
        TextStyle::new(self.fonts.italic, self.body_size, self.label_colour)
    }

    pub fn footer(&self) -> TextStyle {
        TextStyle::new(self.fonts.regular, self.footer_size, self.label_colour)
    }
}

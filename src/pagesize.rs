//! Page sizes and the page geometry that layout works against.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//!
//! # Example
//!
//! ```
//! use note_export::pagesize::{PageGeometry, LETTER};
//! use note_export::Pt;
//!
//! let geometry = PageGeometry::letter();
//! assert_eq!(geometry.size, LETTER);
//! assert_eq!(geometry.content_width(), Pt(468.0));
//! ```

use crate::layout::Margins;
use crate::units::*;
use crate::Rect;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

/// US Letter width in twips (8.5 inches), as used by OOXML section properties
pub const LETTER_WIDTH_TWIPS: Twip = Twip(12240);
/// US Letter height in twips (11 inches)
pub const LETTER_HEIGHT_TWIPS: Twip = Twip(15840);
/// One inch margin in twips
pub const MARGIN_TWIPS: Twip = Twip(1440);

/// The fixed geometry of every page in a document: its size and the margins that bound
/// where content may be drawn. Coordinates follow PDF conventions, so `top_y` is larger
/// than `bottom_y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> PageGeometry {
        PageGeometry { size, margins }
    }

    /// US Letter with one inch margins on every side
    pub fn letter() -> PageGeometry {
        PageGeometry::new(LETTER, Margins::all(In(1.0)))
    }

    /// US Letter expressed in twips, for flowing-paragraph backends. Converts to exactly
    /// the same point geometry as [`PageGeometry::letter`].
    pub fn letter_twips() -> PageGeometry {
        PageGeometry::from_twips(
            (LETTER_WIDTH_TWIPS, LETTER_HEIGHT_TWIPS),
            MARGIN_TWIPS,
        )
    }

    /// Build a geometry from a page size and a uniform margin given in twips
    pub fn from_twips(size: (Twip, Twip), margin: Twip) -> PageGeometry {
        PageGeometry::new((size.0.into(), size.1.into()), Margins::all(Pt::from(margin)))
    }

    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    /// Width available between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.size.0 - self.margins.left - self.margins.right
    }

    /// The y coordinate of the first line on a fresh page
    pub fn top_y(&self) -> Pt {
        self.size.1 - self.margins.top
    }

    /// The lowest y coordinate content may reach
    pub fn bottom_y(&self) -> Pt {
        self.margins.bottom
    }

    pub fn left_x(&self) -> Pt {
        self.margins.left
    }

    pub fn right_x(&self) -> Pt {
        self.size.0 - self.margins.right
    }

    /// Height available between the top and bottom margins
    pub fn usable_height(&self) -> Pt {
        self.top_y() - self.bottom_y()
    }

    /// The full page, i.e. the PDF `MediaBox`
    pub fn media_box(&self) -> Rect {
        Rect::from_xywh(Pt(0.0), Pt(0.0), self.size.0, self.size.1)
    }

    /// The area inside the margins
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.left_x(),
            y1: self.bottom_y(),
            x2: self.right_x(),
            y2: self.top_y(),
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::letter()
    }
}

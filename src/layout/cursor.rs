use crate::colour::Colour;
use crate::font::Font;
use crate::pagesize::PageGeometry;
use crate::units::Pt;

/// The drawing position and active text style of one layout pass.
///
/// `y` is the baseline of the next line to be drawn. It only ever decreases, except when
/// a new page resets it to the top margin. A cursor belongs to exactly one
/// [`ContentBuilder`](crate::layout::ContentBuilder) and lives for a single export.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    pub y: Pt,
    /// 0-based index of the page currently being drawn on
    pub page_index: usize,
    pub font: Font,
    pub size: Pt,
    pub colour: Colour,
}

impl LayoutCursor {
    /// A cursor at the top of the first page
    pub fn new(geometry: &PageGeometry, font: Font, size: Pt, colour: Colour) -> LayoutCursor {
        LayoutCursor {
            y: geometry.top_y(),
            page_index: 0,
            font,
            size,
            colour,
        }
    }

    /// Whether drawing something `required` tall at the cursor would cross the bottom margin
    pub fn needs_page_break(&self, required: Pt, geometry: &PageGeometry) -> bool {
        self.y - required < geometry.bottom_y()
    }

    /// Move down the page. Crossing the bottom margin is allowed here; the next draw's
    /// space check moves to a new page.
    pub fn advance(&mut self, amount: Pt) {
        self.y -= amount;
    }

    /// Move to the top of the next page
    pub fn next_page(&mut self, geometry: &PageGeometry) {
        self.y = geometry.top_y();
        self.page_index += 1;
    }
}

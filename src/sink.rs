//! The seam between layout and an output format.
//!
//! Layout code only ever talks to a [`PageSink`]: it asks for fresh pages and places
//! primitives at absolute page coordinates. Everything format specific (content stream
//! operators, object references, compression) stays behind the trait.

use crate::colour::Colour;
use crate::page::{LineLayout, PageContents, RectLayout, RectStyle, SpanLayout};
use crate::pagesize::PageGeometry;
use crate::rect::Rect;
use crate::units::Pt;
use crate::SinkError;

/// A physical output surface made of fixed-size pages
pub trait PageSink {
    /// Allocate a fresh page with the given geometry. Subsequent draw calls target it.
    fn new_page(&mut self, geometry: &PageGeometry) -> Result<(), SinkError>;

    fn draw_text(&mut self, span: SpanLayout) -> Result<(), SinkError>;

    fn draw_line(&mut self, line: LineLayout) -> Result<(), SinkError>;

    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<(), SinkError>;

    fn stroke_rect(&mut self, rect: Rect, colour: Colour, width: Pt) -> Result<(), SinkError>;
}

impl<S: PageSink + ?Sized> PageSink for &mut S {
    fn new_page(&mut self, geometry: &PageGeometry) -> Result<(), SinkError> {
        (**self).new_page(geometry)
    }

    fn draw_text(&mut self, span: SpanLayout) -> Result<(), SinkError> {
        (**self).draw_text(span)
    }

    fn draw_line(&mut self, line: LineLayout) -> Result<(), SinkError> {
        (**self).draw_line(line)
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<(), SinkError> {
        (**self).fill_rect(rect, colour)
    }

    fn stroke_rect(&mut self, rect: Rect, colour: Colour, width: Pt) -> Result<(), SinkError> {
        (**self).stroke_rect(rect, colour, width)
    }
}

/// A sink that keeps every primitive in memory as a per-page display list. Useful for
/// inspecting a layout without encoding it, and for exercising layout code in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub pages: Vec<Vec<PageContents>>,
    page_limit: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    /// Refuse to allocate more than `limit` pages
    pub fn with_page_limit(limit: usize) -> RecordingSink {
        RecordingSink {
            pages: Vec::new(),
            page_limit: Some(limit),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text span, paired with the 0-based index of the page it was drawn on
    pub fn spans(&self) -> impl Iterator<Item = (usize, &SpanLayout)> {
        self.pages.iter().enumerate().flat_map(|(page_index, page)| {
            page.iter().filter_map(move |c| match c {
                PageContents::Text(span) => Some((page_index, span)),
                _ => None,
            })
        })
    }

    /// The text of every span, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.spans().map(|(_, span)| span.text.as_str()).collect()
    }

    fn current(&mut self) -> Result<&mut Vec<PageContents>, SinkError> {
        self.pages.last_mut().ok_or(SinkError::PageMissing(0))
    }
}

impl PageSink for RecordingSink {
    fn new_page(&mut self, _geometry: &PageGeometry) -> Result<(), SinkError> {
        if let Some(limit) = self.page_limit {
            if self.pages.len() >= limit {
                return Err(SinkError::PageLimit {
                    requested: self.pages.len() + 1,
                    limit,
                });
            }
        }
        self.pages.push(Vec::new());
        Ok(())
    }

    fn draw_text(&mut self, span: SpanLayout) -> Result<(), SinkError> {
        self.current()?.push(PageContents::Text(span));
        Ok(())
    }

    fn draw_line(&mut self, line: LineLayout) -> Result<(), SinkError> {
        self.current()?.push(PageContents::Line(line));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<(), SinkError> {
        self.current()?.push(PageContents::Rect(RectLayout {
            rect,
            colour,
            style: RectStyle::Fill,
        }));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, colour: Colour, width: Pt) -> Result<(), SinkError> {
        self.current()?.push(PageContents::Rect(RectLayout {
            rect,
            colour,
            style: RectStyle::Stroke(width),
        }));
        Ok(())
    }
}

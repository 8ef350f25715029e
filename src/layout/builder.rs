use super::cursor::LayoutCursor;
use super::text::wrap_text;
use crate::colour::{colours, Colour};
use crate::font::{Font, Measurer};
use crate::page::{LineLayout, SpanFont, SpanLayout};
use crate::pagesize::PageGeometry;
use crate::rect::Rect;
use crate::sink::PageSink;
use crate::style::LINE_SPACING_MULTIPLIER;
use crate::units::Pt;
use crate::SinkError;

/// The font, size, and colour a run of text is drawn with
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub const fn new(font: Font, size: Pt, colour: Colour) -> TextStyle {
        TextStyle { font, size, colour }
    }
}

/// A `label: value` pair drawn on one baseline, the label and value each in their own style
#[derive(Debug, Clone, PartialEq)]
pub struct LabelValue<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
}

/// Places content top to bottom on the pages of a [`PageSink`], breaking to a new page
/// whenever the next line would cross the bottom margin.
///
/// The builder owns the sink and the [`LayoutCursor`] for the length of one layout pass;
/// call [`ContentBuilder::finish`] to get the sink back. Every draw checks for space
/// first, so no text baseline ever lands below the bottom margin. Vertical spacing on its
/// own never allocates a page.
pub struct ContentBuilder<S: PageSink, M: Measurer> {
    sink: S,
    measurer: M,
    geometry: PageGeometry,
    cursor: LayoutCursor,
}

impl<S: PageSink, M: Measurer> ContentBuilder<S, M> {
    /// Start laying out into `sink`, allocating its first page. Text starts out as
    /// regular 11pt black Helvetica.
    pub fn new(mut sink: S, measurer: M, geometry: PageGeometry) -> Result<Self, SinkError> {
        sink.new_page(&geometry)?;
        log::debug!("started page 1");
        let cursor = LayoutCursor::new(&geometry, Font::Helvetica, Pt(11.0), colours::BLACK);
        Ok(ContentBuilder {
            sink,
            measurer,
            geometry,
            cursor,
        })
    }

    pub fn cursor(&self) -> &LayoutCursor {
        &self.cursor
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Number of pages allocated so far
    pub fn page_count(&self) -> usize {
        self.cursor.page_index + 1
    }

    /// End the layout pass, handing back the sink
    pub fn finish(self) -> S {
        self.sink
    }

    pub fn set_font(&mut self, font: Font, size: Pt) {
        self.cursor.font = font;
        self.cursor.size = size;
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.cursor.colour = colour;
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.set_font(style.font, style.size);
        self.set_colour(style.colour);
    }

    pub fn style(&self) -> TextStyle {
        TextStyle::new(self.cursor.font, self.cursor.size, self.cursor.colour)
    }

    /// The distance between consecutive baselines at the current font size
    pub fn line_height(&self) -> Pt {
        line_height(self.cursor.size)
    }

    /// Width of `text` in the current font and size
    pub fn text_width(&self, text: &str) -> Pt {
        self.measurer
            .width_of_text(text, self.cursor.font, self.cursor.size)
    }

    /// Move to a new page if something `required` tall doesn't fit above the bottom margin
    pub fn ensure_space(&mut self, required: Pt) -> Result<(), SinkError> {
        if self.cursor.needs_page_break(required, &self.geometry) {
            self.new_page()?;
        }
        Ok(())
    }

    /// Allocate a fresh page and move the cursor to its top margin
    pub fn new_page(&mut self) -> Result<(), SinkError> {
        self.sink.new_page(&self.geometry)?;
        self.cursor.next_page(&self.geometry);
        log::debug!("started page {}", self.cursor.page_index + 1);
        Ok(())
    }

    pub fn advance(&mut self, amount: Pt) {
        self.cursor.advance(amount);
    }

    pub fn add_vertical_space(&mut self, amount: Pt) {
        self.advance(amount);
    }

    fn draw_span(&mut self, text: &str, style: TextStyle, x: Pt) -> Result<(), SinkError> {
        self.sink.draw_text(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font: style.font,
                size: style.size,
            },
            colour: style.colour,
            coords: (x, self.cursor.y),
        })
    }

    /// One line of text at the left margin
    pub fn add_text(&mut self, text: &str) -> Result<(), SinkError> {
        let line_height = self.line_height();
        self.ensure_space(line_height)?;
        self.draw_span(text, self.style(), self.geometry.left_x())?;
        self.advance(line_height);
        Ok(())
    }

    /// A label and its value on the same baseline. The label and the first line of the
    /// value are placed as a unit: they move to a new page together or not at all.
    ///
    /// Values wider than the space right of the label wrap, with continuation lines
    /// aligned under the first line of the value.
    pub fn add_label_value(&mut self, pair: &LabelValue) -> Result<(), SinkError> {
        let label = format!("{}: ", pair.label);
        let line_height = line_height(pair.label_style.size.max(pair.value_style.size));

        let left = self.geometry.left_x();
        let label_width =
            self.measurer
                .width_of_text(&label, pair.label_style.font, pair.label_style.size);
        let value_x = left + label_width;
        let lines = wrap_text(
            pair.value,
            self.geometry.right_x() - value_x,
            pair.value_style.font,
            pair.value_style.size,
            &self.measurer,
        );

        self.ensure_space(line_height)?;
        self.draw_span(&label, pair.label_style, left)?;
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.advance(line_height);
                self.ensure_space(line_height)?;
            }
            self.draw_span(line, pair.value_style, value_x)?;
        }

        self.set_style(pair.value_style);
        self.advance(line_height);
        Ok(())
    }

    /// One line of text centred between the page edges
    pub fn add_centered_text(&mut self, text: &str) -> Result<(), SinkError> {
        let line_height = self.line_height();
        self.ensure_space(line_height)?;
        let x = (self.geometry.width() - self.text_width(text)) / 2.0;
        self.draw_span(text, self.style(), x)?;
        self.advance(line_height);
        Ok(())
    }

    /// One line of text with a thin rule 2pt under its baseline, as wide as the text
    pub fn add_text_with_underline(&mut self, text: &str) -> Result<(), SinkError> {
        let line_height = self.line_height();
        self.ensure_space(line_height)?;

        let left = self.geometry.left_x();
        let width = self.text_width(text);
        self.draw_span(text, self.style(), left)?;

        let underline_y = self.cursor.y - Pt(2.0);
        self.sink.draw_line(LineLayout {
            from: (left, underline_y),
            to: (left + width, underline_y),
            colour: self.cursor.colour,
            width: Pt(0.5),
        })?;

        self.advance(line_height);
        Ok(())
    }

    /// Word-wrap `text` to the content width and add each line in turn. Each line checks
    /// for space on its own, so a paragraph may continue on the next page.
    pub fn add_wrapped_text(&mut self, text: &str) -> Result<(), SinkError> {
        let max_width = self.geometry.content_width();
        let lines = wrap_text(
            text,
            max_width,
            self.cursor.font,
            self.cursor.size,
            &self.measurer,
        );

        for line in lines.iter() {
            let width = self.text_width(line);
            if width > max_width {
                // never log the text itself
                log::warn!(
                    "unbreakable word overflows the content width ({width} > {max_width})"
                );
            }
            self.add_text(line)?;
        }
        Ok(())
    }

    /// A rule across the full content width at the cursor, in the current colour. The
    /// cursor does not move.
    pub fn add_horizontal_line(&mut self) -> Result<(), SinkError> {
        self.ensure_space(Pt(0.0))?;
        let y = self.cursor.y;
        self.sink.draw_line(LineLayout {
            from: (self.geometry.left_x(), y),
            to: (self.geometry.right_x(), y),
            colour: self.cursor.colour,
            width: Pt(0.5),
        })
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<(), SinkError> {
        self.sink.fill_rect(rect, colour)
    }

    pub(crate) fn stroke_rect(
        &mut self,
        rect: Rect,
        colour: Colour,
        width: Pt,
    ) -> Result<(), SinkError> {
        self.sink.stroke_rect(rect, colour, width)
    }

    /// Draw text with its baseline at an absolute position, bypassing the cursor
    pub(crate) fn draw_text_at(
        &mut self,
        text: &str,
        style: TextStyle,
        coords: (Pt, Pt),
    ) -> Result<(), SinkError> {
        self.sink.draw_text(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font: style.font,
                size: style.size,
            },
            colour: style.colour,
            coords,
        })
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut LayoutCursor {
        &mut self.cursor
    }
}

/// Baseline-to-baseline distance for text of the given size
pub fn line_height(size: Pt) -> Pt {
    size * LINE_SPACING_MULTIPLIER
}

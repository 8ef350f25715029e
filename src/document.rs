use crate::{
    colour::Colour,
    font::Font,
    info::Info,
    page::{LineLayout, Page, RectLayout, RectStyle, SpanLayout},
    pagesize::PageGeometry,
    rect::Rect,
    refs::{ObjectReferences, RefType},
    sink::PageSink,
    units::Pt,
    SinkError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the PDF [`PageSink`]: it stores all the pages laid out into it, then
/// encodes them with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    page_limit: Option<usize>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Refuse to allocate more than `limit` pages; layout that would need more fails with
    /// [`SinkError::PageLimit`]
    pub fn set_page_limit(&mut self, limit: usize) {
        self.page_limit = Some(limit);
    }

    /// Add a page to the end of the document, returning its ID
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the page at the given 0-based position in the document
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|id| self.pages.get(*id))
    }

    fn current_page(&mut self) -> Result<&mut Page, SinkError> {
        let index = self.page_order.len().saturating_sub(1);
        let id = self
            .page_order
            .last()
            .copied()
            .ok_or(SinkError::PageMissing(index))?;
        self.pages.get_mut(id).ok_or(SinkError::PageMissing(index))
    }

    /// Write the entire document to the writer. The document is rendered in memory first
    /// and handed to the writer in a single call, so a failing writer never receives a
    /// half-encoded document.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), SinkError> {
        let bytes = self.to_bytes()?;
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }

    /// Encode the entire document into PDF bytes
    pub fn to_bytes(self) -> Result<Vec<u8>, SinkError> {
        let Document {
            info,
            pages,
            page_order,
            ..
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // generate page refs keyed by page_order index (not arena index)
        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for font in Font::ALL.iter() {
            let id = refs.gen(RefType::Font(font.index()));
            writer
                .type1_font(id)
                .base_font(Name(font.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(SinkError::PageMissing(page_index))?;
            page.write(&mut refs, page_index, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        Ok(writer.finish())
    }
}

impl PageSink for Document {
    fn new_page(&mut self, geometry: &PageGeometry) -> Result<(), SinkError> {
        if let Some(limit) = self.page_limit {
            if self.page_order.len() >= limit {
                return Err(SinkError::PageLimit {
                    requested: self.page_order.len() + 1,
                    limit,
                });
            }
        }
        self.add_page(Page::new(geometry));
        Ok(())
    }

    fn draw_text(&mut self, span: SpanLayout) -> Result<(), SinkError> {
        self.current_page()?.add_span(span);
        Ok(())
    }

    fn draw_line(&mut self, line: LineLayout) -> Result<(), SinkError> {
        self.current_page()?.add_line(line);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<(), SinkError> {
        self.current_page()?.add_rect(RectLayout {
            rect,
            colour,
            style: RectStyle::Fill,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, colour: Colour, width: Pt) -> Result<(), SinkError> {
        self.current_page()?.add_rect(RectLayout {
            rect,
            colour,
            style: RectStyle::Stroke(width),
        });
        Ok(())
    }
}

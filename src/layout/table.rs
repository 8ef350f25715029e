use super::builder::{ContentBuilder, TextStyle};
use super::text::truncate_to_width;
use crate::colour::{colours, Colour};
use crate::font::{Font, Measurer};
use crate::rect::Rect;
use crate::sink::PageSink;
use crate::units::Pt;
use crate::SinkError;

/// Horizontal padding between a cell's left border and its text
const CELL_PADDING: Pt = Pt(5.0);

/// A bordered grid of single-line cells. The first row is the header row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub rows: Vec<Vec<String>>,
    /// Width of each column. These should add up to the content width of the page.
    pub column_widths: Vec<Pt>,
    pub header_font: Font,
    pub body_font: Font,
    pub font_size: Pt,
    /// Fill behind the header row's cells
    pub header_bg: Colour,
    /// Colour of the 0.5pt cell borders
    pub border: Colour,
}

impl TableSpec {
    /// Height of every row: two and a half times the font size
    pub fn row_height(&self) -> Pt {
        self.font_size * 2.5
    }

    pub fn total_width(&self) -> Pt {
        self.column_widths.iter().copied().sum()
    }
}

/// Splits `total` into column widths proportional to `fractions`. The last column takes
/// whatever is left so the widths always add up to exactly `total`.
pub fn proportional_widths(total: Pt, fractions: &[f32]) -> Vec<Pt> {
    let mut widths: Vec<Pt> = fractions.iter().map(|f| total * *f).collect();
    if let Some(last) = widths.len().checked_sub(1) {
        let rest: Pt = widths[..last].iter().copied().sum();
        widths[last] = total - rest;
    }
    widths
}

/// Draws `table` at the builder's cursor, one row at a time.
///
/// A table that fits on one page is kept together: if it would cross the bottom margin
/// it starts on a new page. Taller tables break between rows, and rows never split: a row
/// that would cross the bottom margin moves to the top of a new page. Cell text is never wrapped; anything wider than the
/// column (less padding) is truncated from the end. Rows shorter than the column count
/// get empty trailing cells and cells past the last column are ignored. Afterwards the
/// cursor sits at the bottom edge of the last row.
pub fn render_table<S: PageSink, M: Measurer>(
    table: &TableSpec,
    builder: &mut ContentBuilder<S, M>,
) -> Result<(), SinkError> {
    let row_height = table.row_height();
    let left = builder.geometry().left_x();

    let table_height = row_height * table.rows.len() as f32;
    if !table.rows.is_empty() && table_height <= builder.geometry().usable_height() {
        builder.ensure_space(table_height)?;
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        if builder.cursor().needs_page_break(row_height, builder.geometry()) {
            log::debug!("table row {row_index} moves to a new page");
            builder.new_page()?;
        }

        let row_top = builder.cursor().y;
        let row_bottom = row_top - row_height;
        let is_header = row_index == 0;
        let style = TextStyle::new(
            if is_header {
                table.header_font
            } else {
                table.body_font
            },
            table.font_size,
            colours::BLACK,
        );

        let mut cell_x = left;
        for (column, width) in table.column_widths.iter().copied().enumerate() {
            let cell = Rect::from_xywh(cell_x, row_bottom, width, row_height);
            if is_header {
                builder.fill_rect(cell, table.header_bg)?;
            }
            builder.stroke_rect(cell, table.border, Pt(0.5))?;

            let text = row.get(column).map(String::as_str).unwrap_or_default();
            let text = truncate_to_width(
                text,
                width - CELL_PADDING * 2.0,
                style.font,
                style.size,
                builder.measurer(),
            );
            if !text.is_empty() {
                let baseline = row_bottom + (row_height - table.font_size) / 2.0;
                builder.draw_text_at(&text, style, (cell_x + CELL_PADDING, baseline))?;
            }

            cell_x += width;
        }

        builder.cursor_mut().y = row_bottom;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardMetrics;
    use crate::page::PageContents;
    use crate::pagesize::PageGeometry;
    use crate::sink::RecordingSink;

    fn table(rows: Vec<Vec<&str>>) -> TableSpec {
        TableSpec {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            column_widths: proportional_widths(Pt(468.0), &[0.25, 0.30, 0.45]),
            header_font: Font::HelveticaBold,
            body_font: Font::Helvetica,
            font_size: Pt(10.0),
            header_bg: Colour::from_hex(0xE8F4F8),
            border: Colour::from_hex(0xBDC3C7),
        }
    }

    fn builder(sink: RecordingSink) -> ContentBuilder<RecordingSink, StandardMetrics> {
        ContentBuilder::new(sink, StandardMetrics, PageGeometry::letter()).expect("first page")
    }

    #[test]
    fn proportional_widths_fill_the_total() {
        let widths = proportional_widths(Pt(468.0), &[0.25, 0.30, 0.45]);
        assert_eq!(widths.len(), 3);
        assert_eq!(widths[0], Pt(117.0));
        assert_eq!(widths.iter().copied().sum::<Pt>(), Pt(468.0));
        assert!(proportional_widths(Pt(468.0), &[]).is_empty());
    }

    #[test]
    fn header_cells_are_filled_and_every_cell_is_bordered() {
        let t = table(vec![vec!["Category", "Assessment", "Comments"], vec!["Speech", "Normal", "-"]]);
        assert_eq!(t.total_width(), PageGeometry::letter().content_width());

        let mut b = builder(RecordingSink::new());
        render_table(&t, &mut b).expect("can render");
        assert_eq!(b.cursor().y, Pt(720.0) - t.row_height() * 2.0);

        let sink = b.finish();
        let rects: Vec<_> = sink.pages[0]
            .iter()
            .filter_map(|c| match c {
                PageContents::Rect(r) => Some(r.clone()),
                _ => None,
            })
            .collect();
        let fills = rects
            .iter()
            .filter(|r| r.style == crate::page::RectStyle::Fill)
            .count();
        assert_eq!(fills, 3);
        assert_eq!(rects[0].rect.width(), Pt(117.0));
        assert_eq!(rects[0].rect.height(), t.row_height());
        assert_eq!(rects.len() - fills, 6);

        let texts = sink.texts();
        assert_eq!(texts, vec!["Category", "Assessment", "Comments", "Speech", "Normal", "-"]);
    }

    #[test]
    fn cell_text_sits_inside_the_padding() {
        let t = table(vec![vec!["Category", "Assessment", "Comments"]]);
        let mut b = builder(RecordingSink::new());
        render_table(&t, &mut b).expect("can render");

        let sink = b.finish();
        let (_, first) = sink.spans().next().expect("a span");
        assert_eq!(first.coords.0, Pt(77.0));
        assert_eq!(first.coords.1, Pt(720.0) - Pt(25.0) + Pt(7.5));
    }

    #[test]
    fn long_cells_are_truncated_to_the_column() {
        let long = "Client presented as well groomed, alert, and appropriately dressed for the season";
        let t = table(vec![vec!["Category", "Assessment", "Comments"], vec!["Appearance", long, long]]);
        let widths = t.column_widths.clone();
        let mut b = builder(RecordingSink::new());
        render_table(&t, &mut b).expect("can render");

        let sink = b.finish();
        let body: Vec<_> = sink.spans().map(|(_, s)| s.clone()).skip(4).collect();
        for (span, width) in body.iter().zip(widths[1..].iter()) {
            assert!(long.starts_with(&span.text));
            assert!(span.text.len() < long.len());
            let measured = StandardMetrics.width_of_text(&span.text, Font::Helvetica, Pt(10.0));
            assert!(measured <= *width - Pt(10.0));
        }
    }

    #[test]
    fn short_rows_get_empty_cells_and_extra_cells_are_dropped() {
        let t = table(vec![
            vec!["Category", "Assessment", "Comments"],
            vec!["Affect"],
            vec!["Speech", "Normal", "-", "ignored"],
        ]);
        let mut b = builder(RecordingSink::new());
        render_table(&t, &mut b).expect("can render");

        let sink = b.finish();
        let texts = sink.texts();
        assert!(!texts.contains(&"ignored"));
        assert_eq!(texts.len(), 3 + 1 + 3);
        let strokes = sink.pages[0]
            .iter()
            .filter(|c| matches!(c, PageContents::Rect(r) if r.style != crate::page::RectStyle::Fill))
            .count();
        assert_eq!(strokes, 9);
    }

    #[test]
    fn tables_that_fit_on_a_page_are_kept_together() {
        let t = table(vec![
            vec!["Category", "Assessment", "Comments"],
            vec!["Appearance", "Well groomed", "-"],
            vec!["Speech", "Normal", "-"],
        ]);
        let mut b = builder(RecordingSink::new());
        // room for exactly one 25pt row above the bottom margin
        b.add_vertical_space(Pt(720.0 - 72.0 - 30.0));
        render_table(&t, &mut b).expect("can render");
        assert_eq!(b.page_count(), 2);
        assert_eq!(b.cursor().y, Pt(720.0) - Pt(75.0));

        let sink = b.finish();
        assert!(sink.pages[0].is_empty());
        let pages: Vec<usize> = sink.spans().map(|(page, _)| page).collect();
        assert_eq!(pages, vec![1; 9]);
    }

    #[test]
    fn tables_that_just_fit_stay_on_the_current_page() {
        let t = table(vec![vec!["Category", "Assessment", "Comments"], vec!["Speech", "Normal", "-"]]);
        let mut b = builder(RecordingSink::new());
        // exactly two rows of room
        b.add_vertical_space(Pt(720.0 - 72.0 - 50.0));
        render_table(&t, &mut b).expect("can render");
        assert_eq!(b.page_count(), 1);
        assert_eq!(b.cursor().y, Pt(72.0));
    }

    #[test]
    fn tables_taller_than_a_page_break_between_rows() {
        let mut rows = vec![vec!["Category", "Assessment", "Comments"]];
        rows.extend((0..30).map(|_| vec!["Speech", "Normal", "-"]));
        let t = table(rows);
        let mut b = builder(RecordingSink::new());
        b.add_vertical_space(Pt(720.0 - 72.0 - 30.0));
        render_table(&t, &mut b).expect("can render");

        // 31 rows of 25pt: one on the first page, 25 on a full page, five on the last
        assert_eq!(b.page_count(), 3);
        let sink = b.finish();
        let rows_per_page: Vec<usize> = (0..3)
            .map(|p| sink.spans().filter(|(page, _)| *page == p).count() / 3)
            .collect();
        assert_eq!(rows_per_page, vec![1, 25, 5]);

        for page in sink.pages.iter() {
            for content in page.iter() {
                if let PageContents::Rect(r) = content {
                    assert!(r.rect.y1 >= Pt(72.0), "row below the bottom margin");
                    assert!(r.rect.y2 <= Pt(720.0), "row above the top margin");
                }
            }
        }
    }
}

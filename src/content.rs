//! Content stream rendering for pages.

use crate::colour::Colour;
use crate::font::encode_win_ansi;
use crate::page::{LineLayout, PageContents, RectLayout, RectStyle, SpanLayout};
use std::io::Write;

/// Renders page contents to a PDF content stream, converting the high-level drawing
/// primitives into low-level PDF operators. Every primitive is wrapped in its own
/// `q`/`Q` pair so graphics state never leaks from one primitive into the next.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(span) => render_text_span(&mut content, span)?,
            PageContents::Line(line) => render_line(&mut content, line)?,
            PageContents::Rect(rect) => render_rect(&mut content, rect)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_span(content: &mut Vec<u8>, span: &SpanLayout) -> Result<(), std::io::Error> {
    if span.text.is_empty() {
        return Ok(());
    }

    write!(content, "q\n")?;
    write_fill_colour(content, span.colour)?;
    write!(content, "BT\n")?;
    write!(
        content,
        "/F{} {} Tf\n",
        span.font.font.index(),
        span.font.size
    )?;
    write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
    write!(content, "<")?;
    for code in encode_win_ansi(&span.text) {
        write!(content, "{code:02x}")?;
    }
    write!(content, "> Tj\n")?;
    write!(content, "ET\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write_stroke_colour(content, line.colour)?;
    write!(content, "{} w\n", line.width)?;
    write!(content, "{} {} m\n", line.from.0, line.from.1)?;
    write!(content, "{} {} l\n", line.to.0, line.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_rect(content: &mut Vec<u8>, layout: &RectLayout) -> Result<(), std::io::Error> {
    let r = &layout.rect;
    write!(content, "q\n")?;
    match layout.style {
        RectStyle::Fill => write_fill_colour(content, layout.colour)?,
        RectStyle::Stroke(width) => {
            write_stroke_colour(content, layout.colour)?;
            write!(content, "{width} w\n")?;
        }
    }
    write!(content, "{} {} {} {} re\n", r.x1, r.y1, r.width(), r.height())?;
    match layout.style {
        RectStyle::Fill => write!(content, "f\n")?,
        RectStyle::Stroke(_) => write!(content, "S\n")?,
    }
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}

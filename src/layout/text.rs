use crate::font::{Font, Measurer};
use crate::units::Pt;

const TABSIZE: usize = 4;

/// Greedily word-wraps text so that each returned line fits within `max_width`.
///
/// Explicit line breaks (`\n`, `\r\n` or `\r`) always end a line: each paragraph segment
/// between them is wrapped independently and never merges with its neighbours. Blank
/// segments produce no line at all. Within a segment, words are separated by spaces
/// (tabs count as spaces); runs of separators collapse, so every returned line is its
/// words joined by exactly one space.
///
/// Words are added to the current line for as long as the line, measured with the word,
/// still fits. A word that doesn't fit starts the next line. A single word that is wider
/// than `max_width` on its own is placed alone on a line and overflows; words are never
/// split into characters.
///
/// This is a pure function: lines are recomputed on every call.
pub fn wrap_text<M: Measurer + ?Sized>(
    text: &str,
    max_width: Pt,
    font: Font,
    size: Pt,
    measurer: &M,
) -> Vec<String> {
    // normalize newlines and tabs
    let text = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(TABSIZE));

    let mut lines: Vec<String> = Vec::new();
    for segment in text.split('\n') {
        let mut current = String::new();
        for word in segment.split(' ').filter(|w| !w.is_empty()) {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measurer.width_of_text(&candidate, font, size) > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Shortens `text` by removing characters from its end until it measures no wider than
/// `max_width`. Text that already fits is returned unchanged; if not even a single
/// character fits the result is empty.
pub fn truncate_to_width<M: Measurer + ?Sized>(
    text: &str,
    max_width: Pt,
    font: Font,
    size: Pt,
    measurer: &M,
) -> String {
    let mut text = text.to_string();
    // each pass drops one char, so this ends at the empty string at the latest
    while !text.is_empty() && measurer.width_of_text(&text, font, size) > max_width {
        text.pop();
    }
    text
}

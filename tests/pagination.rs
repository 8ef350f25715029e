use note_export::layout::{line_height, ContentBuilder};
use note_export::pagesize::PageGeometry;
use note_export::{Font, Pt, RecordingSink, StandardMetrics};

fn builder() -> ContentBuilder<RecordingSink, StandardMetrics> {
    ContentBuilder::new(RecordingSink::new(), StandardMetrics, PageGeometry::letter())
        .expect("can allocate the first page")
}

fn expected_pages(lines: usize, size: Pt) -> usize {
    let usable = PageGeometry::letter().usable_height();
    ((lines as f32 * line_height(size).0) / usable.0).ceil() as usize
}

#[test]
fn ninety_body_lines_fill_three_pages() {
    let mut b = builder();
    b.set_font(Font::Helvetica, Pt(11.0));
    for i in 0..90 {
        b.add_text(&format!("line {i}")).expect("can add line");
    }
    let sink = b.finish();
    assert_eq!(sink.page_count(), 3);

    let per_page: Vec<usize> = (0..3)
        .map(|p| sink.spans().filter(|(page, _)| *page == p).count())
        .collect();
    assert_eq!(per_page, vec![42, 42, 6]);
}

#[test]
fn page_count_follows_the_line_budget() {
    for size in [Pt(9.0), Pt(10.0), Pt(11.0)] {
        for lines in [1, 10, 41, 42, 43, 84, 85, 150, 200] {
            let mut b = builder();
            b.set_font(Font::Helvetica, size);
            for _ in 0..lines {
                b.add_text("x").expect("can add line");
            }
            assert_eq!(
                b.finish().page_count(),
                expected_pages(lines, size),
                "{lines} lines at {size}pt"
            );
        }
    }
}

#[test]
fn each_page_starts_at_the_top_margin() {
    let mut b = builder();
    for _ in 0..100 {
        b.add_text("x").expect("can add line");
    }
    let sink = b.finish();
    for page in 0..sink.page_count() {
        let first = sink
            .spans()
            .find(|(p, _)| *p == page)
            .map(|(_, s)| s.coords.1)
            .expect("page has text");
        assert_eq!(first, Pt(720.0));
    }
    assert!(sink.spans().all(|(_, s)| s.coords.1 >= Pt(72.0)));
}

#[test]
fn a_wrapped_paragraph_continues_on_the_next_page() {
    let text = lipsum::lipsum(200);
    let mut b = builder();
    b.add_vertical_space(Pt(600.0));
    b.add_wrapped_text(&text).expect("can wrap");
    let sink = b.finish();
    assert_eq!(sink.page_count(), 2);

    let words: Vec<&str> = sink
        .texts()
        .into_iter()
        .flat_map(|t| t.split(' '))
        .collect();
    let original: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(words, original);
}

#[test]
fn ninety_wrapped_lines_fill_three_pages() {
    // each word is about 275pt wide at 11pt, so no two share a 468pt line
    let word = "m".repeat(30);
    let narrative = vec![word.as_str(); 90].join(" ");
    let lines = note_export::layout::wrap_text(
        &narrative,
        PageGeometry::letter().content_width(),
        Font::Helvetica,
        Pt(11.0),
        &StandardMetrics,
    );
    assert_eq!(lines.len(), 90);

    let mut b = builder();
    b.set_font(Font::Helvetica, Pt(11.0));
    b.add_wrapped_text(&narrative).expect("can wrap");
    let sink = b.finish();
    assert_eq!(sink.page_count(), 3);

    let per_page: Vec<usize> = (0..3)
        .map(|p| sink.spans().filter(|(page, _)| *page == p).count())
        .collect();
    assert_eq!(per_page, vec![42, 42, 6]);
    assert!(sink.spans().all(|(_, s)| s.text == word));
}

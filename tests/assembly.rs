use note_export::pagesize::PageGeometry;
use note_export::style::{NoteStyle, CERTIFIED_COLOR, HEADER_TEXT_COLOR, LABEL_TEXT_COLOR};
use note_export::{
    colours, layout_note, Assessment, Entry, ExportData, Font, Measurer, PageContents, Pt,
    RecordingSink, SpanLayout, StandardMetrics,
};

fn layout(data: &ExportData) -> RecordingSink {
    layout_note(
        data,
        &NoteStyle::default(),
        PageGeometry::letter(),
        RecordingSink::new(),
        StandardMetrics,
    )
    .expect("can lay out note")
}

fn span<'a>(sink: &'a RecordingSink, text: &str) -> Option<&'a SpanLayout> {
    sink.spans().map(|(_, s)| s).find(|s| s.text == text)
}

fn position(texts: &[&str], text: &str) -> usize {
    texts
        .iter()
        .position(|t| *t == text)
        .unwrap_or_else(|| panic!("{text:?} was not drawn"))
}

fn full_note() -> ExportData {
    let mut note = ExportData {
        is_certified: true,
        certification_text: Some("I certify that this information is accurate.".into()),
        client_name: Some("Jane Doe".into()),
        client_code: Some("JD-0042".into()),
        narrative: Some("Client reported improved sleep.\nDiscussed coping strategies.".into()),
        symptoms: vec!["Anxiety".into(), "Insomnia".into()],
        collateral_contacts: vec![Entry::new("Mother", 1)],
        collateral_contact_comment: Some("Called to confirm attendance.".into()),
        referrals: vec![Entry { name: None, type_id: 4 }],
        next_appt: Some("One week".into()),
        next_appt_comment: Some("Same time".into()),
        note_id: Some("42".into()),
        generated_timestamp: Some("Tuesday, March 4, 2025 at 2:05 PM".into()),
        ..Default::default()
    };
    note.mental_status.affect = Assessment {
        value: Some("Anxious".into()),
        comment: Some("Tearful at times".into()),
    };
    note
}

#[test]
fn sections_render_in_order() {
    let sink = layout(&full_note());
    let texts = sink.texts();

    let order = [
        "THERAPY PROGRESS NOTE",
        "I certify that this information is accurate.",
        "Client Information",
        "Session Information",
        "Session Narrative",
        "Presenting Symptoms",
        "Mental Status Assessment",
        "Collateral Contacts",
        "Referrals Made",
        "Follow-Up",
        "Note ID: 42  |  Generated: Tuesday, March 4, 2025 at 2:05 PM",
    ];
    let positions: Vec<usize> = order.iter().map(|t| position(&texts, t)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    assert_eq!(texts.last().copied(), Some(order[order.len() - 1]));

    assert!(texts.contains(&"Mother"));
    assert!(texts.contains(&"Referral Type #4"));
    assert!(texts.contains(&"Called to confirm attendance."));
    assert!(texts.contains(&"Anxiety, Insomnia"));
    assert!(texts.contains(&"Same time"));
}

#[test]
fn title_and_headings_are_styled() {
    let sink = layout(&full_note());

    let title = span(&sink, "THERAPY PROGRESS NOTE").expect("title");
    assert_eq!(title.font.font, Font::HelveticaBold);
    assert_eq!(title.font.size, Pt(18.0));
    assert_eq!(title.colour, HEADER_TEXT_COLOR);

    let banner = span(&sink, "I certify that this information is accurate.").expect("banner");
    assert_eq!(banner.font.font, Font::HelveticaOblique);
    assert_eq!(banner.colour, CERTIFIED_COLOR);

    let heading = span(&sink, "Client Information").expect("heading");
    assert_eq!(heading.font.size, Pt(13.0));
    assert_eq!(heading.colour, HEADER_TEXT_COLOR);

    let footer = sink.spans().last().map(|(_, s)| s).expect("footer");
    assert_eq!(footer.font.size, Pt(9.0));
    assert_eq!(footer.colour, LABEL_TEXT_COLOR);
}

#[test]
fn labels_and_values_share_a_baseline() {
    let sink = layout(&full_note());
    let label = span(&sink, "Client: ").expect("label");
    let value = span(&sink, "Jane Doe").expect("value");
    assert_eq!(label.coords.1, value.coords.1);
    assert!(value.coords.0 > label.coords.0);
    assert_eq!(label.colour, LABEL_TEXT_COLOR);
    assert_eq!(label.font.font, Font::HelveticaBold);
    assert_eq!(value.colour, colours::BLACK);
    assert_eq!(value.font.font, Font::Helvetica);
}

#[test]
fn uncertified_notes_have_no_banner() {
    let mut note = full_note();
    note.is_certified = false;
    let sink = layout(&note);
    assert!(span(&sink, "I certify that this information is accurate.").is_none());
}

#[test]
fn empty_optional_sections_are_omitted_entirely() {
    let mut note = full_note();
    note.collateral_contacts.clear();
    note.referrals.clear();
    note.next_appt_comment = None;
    let sink = layout(&note);
    let texts = sink.texts();

    assert!(!texts.contains(&"Collateral Contacts"));
    assert!(!texts.contains(&"Called to confirm attendance."));
    assert!(!texts.contains(&"Referrals Made"));
    assert!(!texts.contains(&"Comment: "));
    assert!(texts.contains(&"Follow-Up"));
}

#[test]
fn missing_narrative_shows_a_placeholder() {
    let note = ExportData {
        note_id: Some("1".into()),
        generated_timestamp: Some("now".into()),
        ..Default::default()
    };
    let sink = layout(&note);
    let texts = sink.texts();

    let placeholder = span(&sink, "No narrative recorded.").expect("placeholder");
    assert_eq!(placeholder.font.font, Font::HelveticaOblique);
    assert_eq!(placeholder.colour, LABEL_TEXT_COLOR);
    assert!(position(&texts, "Session Narrative") < position(&texts, "No narrative recorded."));

    assert!(texts.contains(&"No symptoms recorded."));
    assert!(texts.contains(&"Unknown"));
    assert!(texts.contains(&"N/A"));
    assert!(texts.contains(&"Not specified"));
    assert_eq!(texts.last().copied(), Some("Note ID: 1  |  Generated: now"));
}

#[test]
fn unassessed_mental_status_fills_the_table_with_placeholders() {
    let sink = layout(&ExportData::default());
    let texts = sink.texts();
    let start = position(&texts, "Category");
    assert_eq!(
        &texts[start..start + 15],
        &[
            "Category",
            "Assessment",
            "Comments",
            "Appearance",
            "Not assessed",
            "-",
            "Speech",
            "Not assessed",
            "-",
            "Affect",
            "Not assessed",
            "-",
            "Eye Contact",
            "Not assessed",
            "-",
        ]
    );
}

#[test]
fn nothing_is_drawn_outside_the_margins() {
    let geometry = PageGeometry::letter();
    for paragraphs in 0..24 {
        let mut note = full_note();
        let narrative: Vec<String> = (0..paragraphs).map(|_| lipsum::lipsum(35)).collect();
        note.narrative = Some(narrative.join("\n"));
        let sink = layout(&note);

        for (page, contents) in sink.pages.iter().enumerate() {
            for content in contents.iter() {
                match content {
                    PageContents::Text(s) => {
                        assert!(s.coords.1 >= geometry.bottom_y(), "text below margin on page {page}");
                        assert!(s.coords.1 <= geometry.top_y(), "text above margin on page {page}");
                    }
                    PageContents::Rect(r) => {
                        assert!(r.rect.y1 >= geometry.bottom_y(), "row split across page {page}");
                        assert!(r.rect.y2 <= geometry.top_y());
                        assert!(r.rect.x2 <= geometry.right_x() + Pt(0.01));
                    }
                    PageContents::Line(l) => {
                        assert!(l.from.1 >= geometry.bottom_y() - Pt(2.0));
                    }
                }
            }
        }
    }
}

#[test]
fn a_long_narrative_spans_pages() {
    let mut note = full_note();
    note.narrative = Some(
        (0..12)
            .map(|_| lipsum::lipsum(80))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    let sink = layout(&note);
    assert!(sink.page_count() >= 2);
    let (last_page, footer) = sink.spans().last().expect("footer");
    assert_eq!(last_page, sink.page_count() - 1);
    assert!(footer.text.starts_with("Note ID: 42"));
}

#[test]
fn long_label_values_stay_inside_the_right_margin() {
    let geometry = PageGeometry::letter();
    let mut note = full_note();
    note.appt_comment = Some(
        "Client arrived fifteen minutes late due to traffic and asked that we shorten the \
         session and revisit the homework plan next week."
            .into(),
    );
    note.diagnosis = Some(lipsum::lipsum(40));
    let sink = layout(&note);

    let label = span(&sink, "Appointment Comment: ").expect("label");
    let value_x = label.coords.0
        + StandardMetrics.width_of_text(&label.text, label.font.font, label.font.size);
    let continuation = sink
        .spans()
        .map(|(_, s)| s)
        .filter(|s| s.coords.0 == value_x)
        .count();
    assert!(continuation >= 2, "the comment wraps under its first line");

    for (page, s) in sink.spans() {
        let right = s.coords.0 + StandardMetrics.width_of_text(&s.text, s.font.font, s.font.size);
        assert!(
            right <= geometry.right_x() + Pt(0.01),
            "text past the right margin on page {page}: {right}"
        );
    }
}

#[test]
fn the_mental_status_table_is_never_split() {
    for paragraphs in 0..30 {
        let mut note = full_note();
        let narrative: Vec<String> = (0..paragraphs).map(|_| lipsum::lipsum(30)).collect();
        note.narrative = Some(narrative.join("\n"));
        let sink = layout(&note);

        let pages: Vec<usize> = sink
            .pages
            .iter()
            .enumerate()
            .filter(|(_, contents)| contents.iter().any(|c| matches!(c, PageContents::Rect(_))))
            .map(|(page, _)| page)
            .collect();
        assert_eq!(pages.len(), 1, "table spread over pages {pages:?}");

        let category = sink
            .spans()
            .find(|(_, s)| s.text == "Category")
            .map(|(page, _)| page);
        let eye_contact = sink
            .spans()
            .find(|(_, s)| s.text == "Eye Contact")
            .map(|(page, _)| page);
        assert_eq!(category, eye_contact);
    }
}

#[test]
fn empty_narrative_text_shows_the_placeholder() {
    for narrative in ["", "   ", "\n\n"] {
        let note = ExportData {
            narrative: Some(narrative.into()),
            ..Default::default()
        };
        let sink = layout(&note);
        let texts = sink.texts();
        assert!(
            position(&texts, "Session Narrative") < position(&texts, "No narrative recorded."),
            "{narrative:?}"
        );
    }
}

#[test]
fn empty_assessment_comments_render_as_unassessed() {
    let mut note = ExportData::default();
    note.mental_status.appearance = Assessment {
        value: None,
        comment: Some("".into()),
    };
    let sink = layout(&note);
    let texts = sink.texts();
    let start = position(&texts, "Appearance");
    assert_eq!(&texts[start..start + 3], &["Appearance", "Not assessed", "-"]);
}

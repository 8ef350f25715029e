use note_export::{
    certification_text_for, default_file_name, format_appointment_date, format_timestamp,
    session_type_label, with_pdf_extension, Assessment, Entry, ExportData, Info, PdfExporter,
};
use std::path::PathBuf;

/// Usage: `export-note [note.json] [output.pdf]`. Without a note file a sample note with
/// a long narrative is exported. Without an output path the note is saved under its
/// default name in `out/`.
fn main() {
    let mut args = std::env::args().skip(1);
    let note = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path).expect("can read note file");
            serde_json::from_str(&json).expect("note file is valid JSON")
        }
        None => sample_note(),
    };
    let out: PathBuf = match args.next() {
        Some(path) => with_pdf_extension(path),
        None => PathBuf::from("out").join(default_file_name(&note, None)),
    };

    let exporter = PdfExporter::new().info(
        Info::new()
            .title("Therapy Progress Note")
            .subject("Example export")
            .clone(),
    );
    let written = exporter.export(Some(&note), &out).expect("can export note");
    println!("wrote {}", written.display());
}

fn sample_note() -> ExportData {
    let now = chrono::Local::now().naive_local();
    let mut note = ExportData {
        is_certified: true,
        certification_text: Some(certification_text_for(&now.date())),
        client_name: Some("Jane Doe".into()),
        client_code: Some("JD-0042".into()),
        date_of_birth: Some("04/12/1988".into()),
        appt_date: Some(format_appointment_date(&now)),
        session_type: Some(session_type_label(true).into()),
        session_number: Some("7".into()),
        session_length: Some("50 minutes".into()),
        diagnosis: Some("F41.1 Generalized anxiety disorder".into()),
        narrative: Some(format!(
            "{}\n\n{}\n{}",
            lipsum::lipsum(60),
            lipsum::lipsum(240),
            lipsum::lipsum(120)
        )),
        symptoms: vec!["Anxiety".into(), "Insomnia".into(), "Irritability".into()],
        referrals: vec![Entry::new("Sleep clinic", 3), Entry { name: None, type_id: 5 }],
        referral_comment: Some("Client agreed to both referrals.".into()),
        next_appt: Some("Two weeks".into()),
        note_id: Some("42".into()),
        generated_timestamp: Some(format_timestamp(&now)),
        ..Default::default()
    };
    note.mental_status.appearance = Assessment {
        value: Some("Well groomed".into()),
        comment: None,
    };
    note.mental_status.affect = Assessment {
        value: Some("Anxious".into()),
        comment: Some("Brightened when discussing family".into()),
    };
    note
}

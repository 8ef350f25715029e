use super::data::{ExportData, NO_NARRATIVE};
use crate::font::Measurer;
use crate::layout::{proportional_widths, render_table, ContentBuilder, LabelValue, TableSpec};
use crate::sink::PageSink;
use crate::style::NoteStyle;
use crate::units::Pt;
use crate::SinkError;

pub const TITLE: &str = "THERAPY PROGRESS NOTE";

/// Mental status columns as fractions of the content width
const MENTAL_STATUS_COLUMNS: [f32; 3] = [0.25, 0.30, 0.45];

/// Space after the title, and after a section heading
const HEADING_GAP: Pt = Pt(10.0);
/// Space after a label/value pair or a list entry
const ITEM_GAP: Pt = Pt(6.0);
/// Space between the footer rule and the footer text
const FOOTER_GAP: Pt = Pt(10.0);

/// Lays out a note as a fixed sequence of sections:
///
/// 1. title and, for certified notes, the certification banner
/// 2. Client Information
/// 3. Session Information
/// 4. Session Narrative
/// 5. Presenting Symptoms
/// 6. Mental Status Assessment
/// 7. Collateral Contacts, only when there are any
/// 8. Referrals Made, only when there are any
/// 9. Follow-Up
/// 10. footer with the note id and generation time
///
/// Mandatory sections always render, falling back to placeholders for missing values.
pub struct DocumentAssembler<'s> {
    style: &'s NoteStyle,
}

impl<'s> DocumentAssembler<'s> {
    pub fn new(style: &'s NoteStyle) -> DocumentAssembler<'s> {
        DocumentAssembler { style }
    }

    pub fn assemble<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        self.header(data, builder)?;
        self.client_information(data, builder)?;
        self.session_information(data, builder)?;
        self.narrative(data, builder)?;
        self.symptoms(data, builder)?;
        self.mental_status(data, builder)?;
        self.collateral_contacts(data, builder)?;
        self.referrals(data, builder)?;
        self.follow_up(data, builder)?;
        self.footer(data, builder)
    }

    fn header<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        builder.set_style(self.style.title());
        builder.add_centered_text(TITLE)?;
        builder.add_vertical_space(HEADING_GAP);

        if let Some(certification) = data.certification() {
            builder.set_style(self.style.certification());
            builder.add_centered_text(certification)?;
        }

        builder.add_vertical_space(self.style.section_spacing);
        Ok(())
    }

    fn heading<S: PageSink, M: Measurer>(
        &self,
        text: &str,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        builder.add_vertical_space(self.style.section_spacing);
        builder.set_style(self.style.heading());
        builder.add_text_with_underline(text)?;
        builder.add_vertical_space(HEADING_GAP);
        Ok(())
    }

    fn label_value<S: PageSink, M: Measurer>(
        &self,
        label: &str,
        value: &str,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        builder.add_label_value(&LabelValue {
            label,
            value,
            label_style: self.style.label(),
            value_style: self.style.body(),
        })?;
        builder.add_vertical_space(ITEM_GAP);
        Ok(())
    }

    fn client_information<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        self.heading("Client Information", builder)?;
        self.label_value("Client", data.client_name_text(), builder)?;
        self.label_value("Client Code", data.client_code_text(), builder)?;
        self.label_value("Date of Birth", data.date_of_birth_text(), builder)
    }

    fn session_information<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        self.heading("Session Information", builder)?;
        for (label, value) in data.session_fields() {
            self.label_value(label, value, builder)?;
        }
        Ok(())
    }

    fn narrative<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        self.heading("Session Narrative", builder)?;

        if !data.has_narrative() {
            builder.set_style(self.style.placeholder());
            return builder.add_wrapped_text(NO_NARRATIVE);
        }

        builder.set_style(self.style.body());
        for paragraph in data.narrative_paragraphs() {
            builder.add_wrapped_text(paragraph)?;
            builder.add_vertical_space(self.style.paragraph_spacing);
        }
        Ok(())
    }

    fn symptoms<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        self.heading("Presenting Symptoms", builder)?;
        builder.set_style(if data.has_symptoms() {
            self.style.body()
        } else {
            self.style.placeholder()
        });
        builder.add_wrapped_text(&data.symptoms_text())
    }

    fn mental_status<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        self.heading("Mental Status Assessment", builder)?;

        let table = TableSpec {
            rows: data.mental_status_rows(),
            column_widths: proportional_widths(
                builder.geometry().content_width(),
                &MENTAL_STATUS_COLUMNS,
            ),
            header_font: self.style.fonts.bold,
            body_font: self.style.fonts.regular,
            font_size: self.style.small_size,
            header_bg: self.style.table_header_bg,
            border: self.style.border_colour,
        };
        render_table(&table, builder)?;

        builder.add_vertical_space(self.style.paragraph_spacing);
        Ok(())
    }

    /// A heading, one bold line per entry, then the optional comment. Nothing at all is
    /// drawn for an empty list.
    fn entry_list<S: PageSink, M: Measurer>(
        &self,
        heading: &str,
        names: Vec<String>,
        comment: Option<&str>,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        if names.is_empty() {
            return Ok(());
        }

        self.heading(heading, builder)?;
        for name in names.iter() {
            builder.set_style(self.style.emphasis());
            builder.add_text(name)?;
            builder.add_vertical_space(ITEM_GAP);
        }

        if let Some(comment) = comment {
            builder.set_style(self.style.body());
            builder.add_wrapped_text(comment)?;
        }
        Ok(())
    }

    fn collateral_contacts<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        let names = data
            .collateral_contacts
            .iter()
            .map(|c| c.display_name("Contact Type"))
            .collect();
        self.entry_list(
            "Collateral Contacts",
            names,
            data.collateral_contact_comment(),
            builder,
        )
    }

    fn referrals<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        let names = data
            .referrals
            .iter()
            .map(|r| r.display_name("Referral Type"))
            .collect();
        self.entry_list("Referrals Made", names, data.referral_comment(), builder)
    }

    fn follow_up<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        self.heading("Follow-Up", builder)?;
        self.label_value("Next Appointment", data.next_appt_text(), builder)?;
        if let Some(comment) = data.next_appt_comment() {
            self.label_value("Comment", comment, builder)?;
        }
        Ok(())
    }

    fn footer<S: PageSink, M: Measurer>(
        &self,
        data: &ExportData,
        builder: &mut ContentBuilder<S, M>,
    ) -> Result<(), SinkError> {
        builder.add_vertical_space(self.style.section_spacing);
        builder.set_colour(self.style.border_colour);
        builder.add_horizontal_line()?;
        builder.add_vertical_space(FOOTER_GAP);

        builder.set_style(self.style.footer());
        builder.add_text(&data.footer_text())
    }
}

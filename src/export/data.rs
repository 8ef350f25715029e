use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const UNKNOWN_CLIENT: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NOT_ASSESSED: &str = "Not assessed";
pub const NO_COMMENT: &str = "-";
pub const NO_NARRATIVE: &str = "No narrative recorded.";
pub const NO_SYMPTOMS: &str = "No symptoms recorded.";

const TIMESTAMP_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p";
const APPOINTMENT_DATE_FORMAT: &str = "%A, %B %-d, %Y";
const DATE_FORMAT: &str = "%B %-d, %Y";
const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One line of the mental status table: the assessed value and an optional comment
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    pub value: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentalStatus {
    pub appearance: Assessment,
    pub speech: Assessment,
    pub affect: Assessment,
    pub eye_contact: Assessment,
}

/// A collateral contact or referral. Entries without a name are shown by their type id.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub name: Option<String>,
    pub type_id: i64,
}

impl Entry {
    pub fn new<S: ToString>(name: S, type_id: i64) -> Entry {
        Entry {
            name: Some(name.to_string()),
            type_id,
        }
    }

    /// The entry's name, or `"{kind} #{type_id}"` if it has none
    pub fn display_name(&self, kind: &str) -> String {
        match present(&self.name) {
            Some(name) => name.to_string(),
            None => format!("{kind} #{}", self.type_id),
        }
    }
}

/// A flattened, display-ready snapshot of one therapy progress note.
///
/// Every value is already a display string; absent or blank values are replaced by the
/// appropriate placeholder when the note is laid out. Missing fields deserialize as
/// absent, so partial fixtures are fine.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportData {
    pub is_certified: bool,
    pub certification_text: Option<String>,

    pub client_name: Option<String>,
    pub client_code: Option<String>,
    pub date_of_birth: Option<String>,

    pub appt_date: Option<String>,
    pub session_type: Option<String>,
    pub session_number: Option<String>,
    pub session_length: Option<String>,
    pub diagnosis: Option<String>,
    pub appt_comment: Option<String>,

    pub narrative: Option<String>,
    pub symptoms: Vec<String>,
    pub mental_status: MentalStatus,

    pub collateral_contacts: Vec<Entry>,
    pub collateral_contact_comment: Option<String>,
    pub referrals: Vec<Entry>,
    pub referral_comment: Option<String>,

    pub next_appt: Option<String>,
    pub next_appt_comment: Option<String>,

    pub note_id: Option<String>,
    pub generated_timestamp: Option<String>,
}

/// `Some` only for values with visible content
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'static str) -> &'a str {
    present(value).unwrap_or(placeholder)
}

impl ExportData {
    /// The certification banner, shown only for certified notes that carry its text
    pub fn certification(&self) -> Option<&str> {
        if self.is_certified {
            present(&self.certification_text)
        } else {
            None
        }
    }

    pub fn client_name_text(&self) -> &str {
        or_placeholder(&self.client_name, UNKNOWN_CLIENT)
    }

    pub fn client_code_text(&self) -> &str {
        or_placeholder(&self.client_code, NOT_AVAILABLE)
    }

    pub fn date_of_birth_text(&self) -> &str {
        or_placeholder(&self.date_of_birth, NOT_SPECIFIED)
    }

    /// Session information rows in display order. The appointment comment is included
    /// only when there is one.
    pub fn session_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("Appointment Date", or_placeholder(&self.appt_date, NOT_SPECIFIED)),
            ("Session Type", or_placeholder(&self.session_type, NOT_SPECIFIED)),
            ("Session Number", or_placeholder(&self.session_number, NOT_SPECIFIED)),
            ("Session Length", or_placeholder(&self.session_length, NOT_SPECIFIED)),
            ("Diagnosis", or_placeholder(&self.diagnosis, NOT_SPECIFIED)),
        ];
        if let Some(comment) = present(&self.appt_comment) {
            fields.push(("Appointment Comment", comment));
        }
        fields
    }

    pub fn has_appt_comment(&self) -> bool {
        present(&self.appt_comment).is_some()
    }

    pub fn has_narrative(&self) -> bool {
        present(&self.narrative).is_some()
    }

    /// Non-blank narrative paragraphs, trimmed
    pub fn narrative_paragraphs(&self) -> Vec<&str> {
        present(&self.narrative)
            .map(|n| n.lines().map(str::trim).filter(|p| !p.is_empty()).collect())
            .unwrap_or_default()
    }

    pub fn has_symptoms(&self) -> bool {
        self.symptoms.iter().any(|s| !s.trim().is_empty())
    }

    /// Symptom names joined by commas, or a placeholder when there are none
    pub fn symptoms_text(&self) -> String {
        if !self.has_symptoms() {
            return NO_SYMPTOMS.to_string();
        }
        self.symptoms
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The mental status table, header row first
    pub fn mental_status_rows(&self) -> Vec<Vec<String>> {
        let ms = &self.mental_status;
        let row = |category: &str, a: &Assessment| {
            vec![
                category.to_string(),
                or_placeholder(&a.value, NOT_ASSESSED).to_string(),
                or_placeholder(&a.comment, NO_COMMENT).to_string(),
            ]
        };
        vec![
            vec![
                "Category".to_string(),
                "Assessment".to_string(),
                "Comments".to_string(),
            ],
            row("Appearance", &ms.appearance),
            row("Speech", &ms.speech),
            row("Affect", &ms.affect),
            row("Eye Contact", &ms.eye_contact),
        ]
    }

    pub fn has_collateral_contacts(&self) -> bool {
        !self.collateral_contacts.is_empty()
    }

    pub fn collateral_contact_comment(&self) -> Option<&str> {
        present(&self.collateral_contact_comment)
    }

    pub fn has_referrals(&self) -> bool {
        !self.referrals.is_empty()
    }

    pub fn referral_comment(&self) -> Option<&str> {
        present(&self.referral_comment)
    }

    pub fn next_appt_text(&self) -> &str {
        or_placeholder(&self.next_appt, NOT_SPECIFIED)
    }

    pub fn next_appt_comment(&self) -> Option<&str> {
        present(&self.next_appt_comment)
    }

    pub fn has_next_appt_comment(&self) -> bool {
        self.next_appt_comment().is_some()
    }

    /// `Note ID: {id}  |  Generated: {timestamp}`. A note without a generation time is
    /// stamped with the current local time.
    pub fn footer_text(&self) -> String {
        let note_id = or_placeholder(&self.note_id, NOT_AVAILABLE);
        let generated = match present(&self.generated_timestamp) {
            Some(ts) => ts.to_string(),
            None => format_timestamp(&chrono::Local::now().naive_local()),
        };
        format!("Note ID: {note_id}  |  Generated: {generated}")
    }
}

/// e.g. `Tuesday, March 4, 2025 at 2:05 PM`
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// e.g. `Tuesday, March 4, 2025`
pub fn format_appointment_date(at: &NaiveDateTime) -> String {
    at.format(APPOINTMENT_DATE_FORMAT).to_string()
}

/// e.g. `March 4, 2025`
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The attestation shown on certified notes
pub fn certification_text_for(certified_on: &NaiveDate) -> String {
    format!(
        "I certify that this information is accurate to the best of my knowledge. {}",
        format_date(certified_on)
    )
}

/// The name an exported note is saved under when the caller doesn't pick one:
/// `note_{client code}_{yyyy-mm-dd}.pdf`. A missing client code becomes `unknown` and a
/// missing appointment date falls back to today.
pub fn default_file_name(data: &ExportData, appt_date: Option<&NaiveDate>) -> String {
    let code = present(&data.client_code)
        .map(sanitize_file_name)
        .unwrap_or_else(|| "unknown".to_string());
    let date = match appt_date {
        Some(date) => *date,
        None => chrono::Local::now().date_naive(),
    };
    format!("note_{code}_{}.pdf", date.format(FILE_DATE_FORMAT))
}

/// Replaces everything except ASCII letters, digits, `.` and `-` with `_`
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// How a session was held
pub fn session_type_label(is_virtual: bool) -> &'static str {
    if is_virtual {
        "Virtual/Telehealth"
    } else {
        "In-Person"
    }
}

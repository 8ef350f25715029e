//! Paginated PDF exports of therapy progress notes.
//!
//! A note ([`ExportData`]) is laid out top to bottom onto fixed-size US Letter pages by
//! hand: a cursor tracks the current baseline, paragraphs are greedily word-wrapped,
//! tables break between rows, and a new page is started whenever the next line would
//! cross the bottom margin. Layout only talks to a [`PageSink`]; [`Document`] encodes
//! what it receives as PDF and [`RecordingSink`] keeps it in memory.
//!
//! # Example
//!
//! ```
//! use note_export::{render_pdf, ExportData, ExportError};
//!
//! let note = ExportData {
//!     client_name: Some("Jane Doe".into()),
//!     narrative: Some("Client reported improved sleep.".into()),
//!     ..Default::default()
//! };
//! let pdf = render_pdf(Some(&note)).expect("can render");
//! assert!(pdf.starts_with(b"%PDF-"));
//!
//! assert!(matches!(render_pdf(None), Err(ExportError::MissingInput)));
//! ```

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Pagination, text wrapping, and table layout
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod sink;
pub use sink::*;

pub mod style;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;

//! Pagination and layout primitives.
//!
//! Layout is a single top-to-bottom pass over fixed-size pages. A [`ContentBuilder`] owns
//! a [`LayoutCursor`] and a [`PageSink`](crate::PageSink); each primitive checks that
//! what it's about to draw fits above the bottom margin, moves to a new page if it
//! doesn't, draws at absolute page coordinates, then advances the cursor.
//!
//! - [`wrap_text`] greedily word-wraps text to a width
//! - [`truncate_to_width`] shortens a single line to a width
//! - [`render_table`] draws a bordered grid, breaking pages between rows
//!
//! # Example
//!
//! ```
//! use note_export::{RecordingSink, StandardMetrics, Font, Pt};
//! use note_export::layout::ContentBuilder;
//! use note_export::pagesize::PageGeometry;
//!
//! let mut builder = ContentBuilder::new(RecordingSink::new(), StandardMetrics, PageGeometry::letter())
//!     .expect("can allocate the first page");
//! builder.set_font(Font::HelveticaBold, Pt(13.0));
//! builder.add_text_with_underline("Session Narrative").expect("can draw");
//! builder.set_font(Font::Helvetica, Pt(11.0));
//! builder.add_wrapped_text("Client reported improved sleep this week.").expect("can draw");
//!
//! let sink = builder.finish();
//! assert_eq!(sink.page_count(), 1);
//! assert_eq!(sink.texts(), vec!["Session Narrative", "Client reported improved sleep this week."]);
//! ```

mod builder;
mod cursor;
mod margins;
mod table;
mod text;

pub use builder::*;
pub use cursor::*;
pub use margins::*;
pub use table::*;
pub use text::*;

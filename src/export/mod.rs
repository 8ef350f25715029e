//! Exporting a single therapy progress note.
//!
//! Layout always runs to completion in memory before anything touches the filesystem, so
//! a failed export never leaves a partial document behind.

mod assembler;
mod data;

pub use assembler::*;
pub use data::*;

use crate::document::Document;
use crate::font::{Measurer, StandardMetrics};
use crate::info::Info;
use crate::layout::ContentBuilder;
use crate::pagesize::PageGeometry;
use crate::sink::PageSink;
use crate::style::NoteStyle;
use crate::{ExportError, SinkError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Lay `data` out onto `sink`, returning the sink once every section has been placed
pub fn layout_note<S: PageSink, M: Measurer>(
    data: &ExportData,
    style: &NoteStyle,
    geometry: PageGeometry,
    sink: S,
    measurer: M,
) -> Result<S, SinkError> {
    let mut builder = ContentBuilder::new(sink, measurer, geometry)?;
    DocumentAssembler::new(style).assemble(data, &mut builder)?;
    log::debug!("laid out note over {} page(s)", builder.page_count());
    Ok(builder.finish())
}

/// Renders notes to PDF. Cheap to construct; holds no state between exports.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    pub style: NoteStyle,
    pub geometry: PageGeometry,
    pub page_limit: Option<usize>,
    pub info: Option<Info>,
}

impl PdfExporter {
    pub fn new() -> PdfExporter {
        PdfExporter::default()
    }

    /// Fail any export that would need more than `limit` pages
    pub fn page_limit(mut self, limit: usize) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Document metadata to embed instead of the default title and subject
    pub fn info(mut self, info: Info) -> Self {
        self.info = Some(info);
        self
    }

    fn document(&self) -> Document {
        let mut doc = Document::new();
        if let Some(limit) = self.page_limit {
            doc.set_page_limit(limit);
        }
        let info = self.info.clone().unwrap_or_else(|| {
            let mut info = Info::new();
            info.title("Therapy Progress Note")
                .subject("Therapy progress note export");
            info
        });
        doc.set_info(info);
        doc
    }

    /// Render `data` to PDF bytes
    pub fn render(&self, data: Option<&ExportData>) -> Result<Vec<u8>, ExportError> {
        let data = data.ok_or(ExportError::MissingInput)?;
        let doc = layout_note(
            data,
            &self.style,
            self.geometry,
            self.document(),
            StandardMetrics,
        )?;
        let pages = doc.page_count();
        let bytes = doc.to_bytes()?;
        log::debug!("encoded {pages} page(s) into {} bytes", bytes.len());
        Ok(bytes)
    }

    /// Render `data` and write it to `path`, creating any missing parent directories.
    ///
    /// The document is written to a temporary file next to `path` and then moved over
    /// it, so `path` either holds the complete new document or is left untouched.
    pub fn export<P: AsRef<Path>>(
        &self,
        data: Option<&ExportData>,
        path: P,
    ) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        let bytes = self.render(data)?;
        write_atomically(path, &bytes)?;
        log::info!("exported note to {}", path.display());
        Ok(path.to_path_buf())
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), SinkError> {
    let write_error = |source| SinkError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// `path` with `.pdf` appended, unless it already ends in `.pdf` in any letter case
pub fn with_pdf_extension<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".pdf");
            PathBuf::from(name)
        }
    }
}

/// Render `data` to PDF bytes with the default style on US Letter pages
pub fn render_pdf(data: Option<&ExportData>) -> Result<Vec<u8>, ExportError> {
    PdfExporter::new().render(data)
}

/// Render `data` with the default style on US Letter pages and write it to `path`
pub fn export_pdf<P: AsRef<Path>>(
    data: Option<&ExportData>,
    path: P,
) -> Result<PathBuf, ExportError> {
    PdfExporter::new().export(data, path)
}

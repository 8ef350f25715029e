use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a [`PageSink`](crate::PageSink) while allocating pages or encoding
/// the finished document
#[derive(Error, Debug)]
pub enum SinkError {
    #[error(transparent)]
    /// An I/O error occurred while encoding or writing the document
    Io(#[from] std::io::Error),

    #[error("cannot allocate page {requested}: the sink is limited to {limit} pages")]
    /// The sink refused to allocate another page
    PageLimit { requested: usize, limit: usize },

    #[error("page {0} is missing from the document")]
    /// A page referenced by the page order no longer exists
    PageMissing(usize),

    #[error("cannot write {}", path.display())]
    /// The finished document could not be written to its destination
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// All errors that exporting a note can produce
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot export a note that is missing")]
    /// No note data was provided; nothing was laid out or written
    MissingInput,

    #[error("export failed: {0}")]
    /// Layout, encoding, or writing the document failed; nothing was written
    Failed(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn write_errors_name_the_path_and_chain_the_cause() {
        let err = SinkError::Write {
            path: PathBuf::from("/notes/jane-doe.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        assert_eq!(err.to_string(), "cannot write /notes/jane-doe.pdf");
        let cause = err.source().expect("the io error is the source");
        assert_eq!(cause.to_string(), "access denied");

        let err = ExportError::from(err);
        assert!(err.source().is_some());
        assert!(!err.to_string().contains("access denied"));
    }
}

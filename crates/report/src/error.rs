use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot render a report without iteration records")]
    EmptyTrace,

    #[error("invalid layout: {reason}")]
    InvalidLayout { reason: String },

    #[error("failed to write report to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

use thiserror::Error;

use std::io;

use crate::value::UnsupportedKind;

#[derive(Debug, Error)]
pub enum Error {
    /// A reachable node has no JSON representation.
    #[error("unsupported type: {kind}")]
    UnsupportedType { kind: UnsupportedKind },

    /// Two members of one record resolved to the same output name.
    #[error("duplicate field name {name:?}")]
    DuplicateField { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn unsupported(kind: UnsupportedKind) -> Self {
        Error::UnsupportedType { kind }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

use crate::scalar::ScalarKind;
use std::fmt;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("type mismatch for `{name}`: declared {declared}, got {found}")]
    TypeMismatch {
        name: String,
        declared: ScalarKind,
        found: ScalarKind,
    },
    #[error("local `{0}` is read before it was initialized")]
    UninitializedLocal(String),
    #[error("`{0}` is read-only and cannot be reassigned")]
    ReadOnlyAssignment(String),
    #[error("duplicate entry `{0}`")]
    DuplicateName(String),
    #[error("no entry named `{0}`")]
    UnknownEntry(String),
    #[error("format error: {0}")]
    Format(#[from] fmt::Error),
    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}

// Convert from std::io::Error to our Error type
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Generic(e.to_string())
    }
}
impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Generic(e.to_string())
    }
}

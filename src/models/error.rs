use crate::models::admission::RejectReason;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Display, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum VaultError {
    #[display("mod not found: {_0}")]
    ModNotFound(String),
    #[display("mod already installed: {_0}")]
    AlreadyInstalled(String),
    #[display("package rejected: {_0}")]
    Inadmissible(RejectReason),
    #[display("I/O error: {_0}")]
    IOError(String),
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("archive error: {_0}")]
    ArchiveError(String),
}

impl std::error::Error for VaultError {}

impl From<std::io::Error> for VaultError {
    fn from(e: std::io::Error) -> Self {
        VaultError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(e: serde_json::Error) -> Self {
        VaultError::ParseError(e.to_string())
    }
}

impl From<zip::result::ZipError> for VaultError {
    fn from(e: zip::result::ZipError) -> Self {
        VaultError::ArchiveError(e.to_string())
    }
}

impl From<RejectReason> for VaultError {
    fn from(reason: RejectReason) -> Self {
        VaultError::Inadmissible(reason)
    }
}

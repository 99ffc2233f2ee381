use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Descriptor fields a candidate package must fill in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataField {
    Name,
    Author,
    Description,
}

/// Why a candidate package was refused admission. `Collision` carries the
/// ids of the installed mods that own the contested paths, so the caller can
/// offer to disable them instead of just reporting a failure.
#[derive(Display, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    #[display("package descriptor is missing fields: {_0:?}")]
    IncompleteMetadata(Vec<MetadataField>),
    #[display("package has no content directory")]
    NoContent,
    #[display("package contains no files")]
    NoFiles,
    #[display("package files collide with installed mods: {_0:?}")]
    Collision(BTreeSet<String>),
}

/// Outcome of the admission pipeline.
pub type AdmissionResult = Result<(), RejectReason>;

use crate::core::ownership::FileOwnershipIndex;
use crate::models::admission::{AdmissionResult, MetadataField, RejectReason};
use crate::models::mod_meta::CandidatePackage;
use crate::models::paths;

/// Admission gate for candidate packages. Stages run in a fixed order and
/// stop at the first failure; only the collision stage reports exhaustively.
pub fn validate(candidate: &CandidatePackage, index: &FileOwnershipIndex) -> AdmissionResult {
    check_descriptor(candidate)?;
    check_content_present(candidate)?;
    check_has_files(candidate)?;
    check_collisions(candidate, index)
}

fn check_descriptor(candidate: &CandidatePackage) -> AdmissionResult {
    let descriptor = &candidate.descriptor;
    let missing: Vec<MetadataField> = [
        (descriptor.name.is_empty(), MetadataField::Name),
        (descriptor.author.is_empty(), MetadataField::Author),
        (descriptor.description.is_empty(), MetadataField::Description),
    ]
    .into_iter()
    .filter(|(is_missing, _)| *is_missing)
    .map(|(_, field)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RejectReason::IncompleteMetadata(missing))
    }
}

fn check_content_present(candidate: &CandidatePackage) -> AdmissionResult {
    let has_content = candidate
        .entries
        .keys()
        .any(|path| path.starts_with(paths::CONTENT_PREFIX));

    if has_content {
        Ok(())
    } else {
        Err(RejectReason::NoContent)
    }
}

fn check_has_files(candidate: &CandidatePackage) -> AdmissionResult {
    if candidate.file_paths().next().is_some() {
        Ok(())
    } else {
        Err(RejectReason::NoFiles)
    }
}

fn check_collisions(candidate: &CandidatePackage, index: &FileOwnershipIndex) -> AdmissionResult {
    let colliding = index.find_collisions(&candidate.content_files());
    if colliding.is_empty() {
        Ok(())
    } else {
        Err(RejectReason::Collision(colliding))
    }
}

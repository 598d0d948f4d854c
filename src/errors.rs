//! Error taxonomy surfaced to the operator
//!
//! Everything propagates as `anyhow::Error`; these variants mark the failures
//! callers may want to tell apart (and tests downcast to).

use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A commit references a blob that is missing from the object store
    #[error("object {0} not found in the object database")]
    ObjectNotFound(ObjectId),

    #[error("commit {0} not found")]
    CommitNotFound(String),

    #[error("branch {0} not found")]
    BranchNotFound(String),

    #[error("revision {0} is ambiguous: {}", format_candidates(.1))]
    AmbiguousRevision(String, Vec<ObjectId>),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("branch {0} already exists")]
    BranchAlreadyExists(String),
}

fn format_candidates(candidates: &[ObjectId]) -> String {
    candidates
        .iter()
        .map(ObjectId::to_short_oid)
        .collect::<Vec<_>>()
        .join(", ")
}

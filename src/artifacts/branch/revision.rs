//! Revision parsing and resolution
//!
//! A revision names the commit to check out or branch from:
//!
//! - `""`, `head`, `HEAD`, `@`: the commit currently checked out
//! - `<branch>`: the commit a branch points to
//! - `<sha>`: a full 40-character commit ID
//! - `<prefix>`: an abbreviated commit ID (at least 4 characters, must be unique)
//!
//! Branch names take precedence over commit IDs.

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{HEAD_REF_NAME, REF_ALIASES};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;

/// Shortest abbreviation accepted for a commit ID
pub const MIN_PREFIX_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    Ref(String),
}

/// A revision resolved to a commit, remembering the branch it was reached through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRevision {
    pub oid: ObjectId,
    pub branch: Option<BranchName>,
}

impl Revision {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if raw.is_empty() || raw.eq_ignore_ascii_case(HEAD_REF_NAME) || REF_ALIASES.contains_key(raw)
        {
            Revision::Head
        } else {
            Revision::Ref(raw.to_string())
        }
    }

    /// Resolve the revision against the repository
    ///
    /// # Returns
    ///
    /// None only for `Head` in a repository without commits
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<Option<ResolvedRevision>> {
        match self {
            Revision::Head => match repository.refs().read_head()? {
                Some(oid) => Ok(Some(ResolvedRevision {
                    oid,
                    branch: repository.refs().current_branch()?,
                })),
                None => Ok(None),
            },
            Revision::Ref(name) => Self::resolve_ref(repository, name).map(Some),
        }
    }

    fn resolve_ref(repository: &Repository, name: &str) -> anyhow::Result<ResolvedRevision> {
        if let Ok(branch) = BranchName::try_parse(name.to_string())
            && repository.refs().branch_exists(&branch)
        {
            let oid = repository.refs().read_branch(&branch)?;
            return Ok(ResolvedRevision {
                oid,
                branch: Some(branch),
            });
        }

        let oid = Self::resolve_commit_id(repository, name)?;
        Ok(ResolvedRevision { oid, branch: None })
    }

    fn resolve_commit_id(repository: &Repository, name: &str) -> anyhow::Result<ObjectId> {
        if !ObjectId::is_valid_prefix(name) || name.len() < MIN_PREFIX_LENGTH {
            return Err(RepositoryError::CommitNotFound(name.to_string()).into());
        }

        if name.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(name.to_string())?;
            return if repository.database().contains(&oid, ObjectType::Commit) {
                Ok(oid)
            } else {
                Err(RepositoryError::CommitNotFound(name.to_string()).into())
            };
        }

        let mut candidates = repository.database().find_commits_by_prefix(name)?;
        match candidates.len() {
            0 => Err(RepositoryError::CommitNotFound(name.to_string()).into()),
            1 => Ok(candidates.remove(0)),
            _ => Err(RepositoryError::AmbiguousRevision(name.to_string(), candidates).into()),
        }
    }
}

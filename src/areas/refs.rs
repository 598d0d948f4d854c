//! References (branches and head)
//!
//! References are human-readable names pointing to commits.
//!
//! ## Layout
//!
//! - `branches/head.txt`: the commit currently checked out
//! - `branches/<name>.txt`: the commit a branch points to
//! - `current_branch.txt`: the name of the checked-out branch; empty when
//!   head is detached, absent before the first checkout (the default branch)
//!
//! ## File Format
//!
//! Ref files hold a bare 40-character SHA-1 hash, or nothing for a branch
//! that has no commits yet.

use crate::artifacts::branch::HEAD_REF_NAME;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::OBJECT_FILE_EXTENSION;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use fake::rand;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CURRENT_BRANCH_FILE: &str = "current_branch.txt";

/// References manager
///
/// Handles reading and writing the head pointer, branch pointers and the
/// name of the checked-out branch.
#[derive(Debug)]
pub struct Refs {
    /// Path to the metadata directory (typically `.fool`)
    path: Box<Path>,
    /// Branch checked out when no branch has been recorded yet
    default_branch: BranchName,
}

impl Refs {
    pub fn new(path: Box<Path>, default_branch: BranchName) -> Self {
        Refs {
            path,
            default_branch,
        }
    }

    /// Read the commit currently checked out
    ///
    /// # Returns
    ///
    /// None when the repository has no commits yet
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        Self::read_ref_file(&self.head_path())
    }

    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        tracing::debug!(%oid, "updating head");
        self.update_ref_file(&self.head_path(), oid.as_ref())
    }

    /// Read the commit a branch points to
    ///
    /// # Errors
    ///
    /// `BranchNotFound` when the branch does not exist or has no commits yet
    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<ObjectId> {
        Self::read_ref_file(&self.branch_path(branch_name))?
            .ok_or_else(|| RepositoryError::BranchNotFound(branch_name.to_string()).into())
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    pub fn update_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        tracing::debug!(branch = %branch_name, %oid, "updating branch");
        self.update_ref_file(&self.branch_path(branch_name), oid.as_ref())
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        // check whether another branch with the same name already exists
        if self.branch_exists(name) {
            return Err(RepositoryError::BranchAlreadyExists(name.to_string()).into());
        }

        self.update_branch(name, source_oid)
    }

    /// List all branch names in sorted order
    pub fn list_branches(&self) -> anyhow::Result<BTreeSet<BranchName>> {
        let branches_path = self.branches_path();
        if !branches_path.is_dir() {
            return Ok(BTreeSet::new());
        }

        let mut branches = BTreeSet::new();
        for entry in WalkDir::new(&branches_path) {
            let entry = entry.with_context(|| {
                format!("failed to list branches in {}", branches_path.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry
                .path()
                .strip_prefix(&branches_path)
                .ok()
                .and_then(Self::branch_name_from_ref_path)
            else {
                continue;
            };

            if name == HEAD_REF_NAME {
                continue;
            }

            match BranchName::try_parse(name) {
                Ok(branch_name) => {
                    branches.insert(branch_name);
                }
                Err(err) => tracing::warn!(%err, "ignoring unexpected file in branches directory"),
            }
        }

        Ok(branches)
    }

    fn branch_name_from_ref_path(relative_path: &Path) -> Option<String> {
        let name = relative_path
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        name.strip_suffix(OBJECT_FILE_EXTENSION)
            .and_then(|name| name.strip_suffix('.'))
            .map(str::to_string)
    }

    /// The checked-out branch, or None when head is detached
    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        let path = self.current_branch_path();
        if !path.exists() {
            return Ok(Some(self.default_branch.clone()));
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read current branch at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(BranchName::try_parse(content.to_string())?))
        }
    }

    /// Attach head to a branch, or detach it with None
    pub fn set_current_branch(&self, branch_name: Option<&BranchName>) -> anyhow::Result<()> {
        let content = branch_name.map(BranchName::as_ref).unwrap_or_default();
        self.update_ref_file(&self.current_branch_path(), content)
    }

    fn read_ref_file(path: &Path) -> anyhow::Result<Option<ObjectId>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string()).with_context(
                || format!("corrupt ref file at {:?}", path),
            )?))
        }
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        let parent = path
            .parent()
            .with_context(|| format!("invalid ref file path {:?}", path))?;
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create parent directories for ref file at {:?}", path)
        })?;

        // write a sibling temp file and rename it over the ref
        let temp_path = parent.join(format!("tmp-ref-{}", rand::random::<u32>()));
        std::fs::write(&temp_path, raw_ref)
            .with_context(|| format!("failed to write ref file at {:?}", temp_path))?;
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("failed to rename ref file to {:?}", path))?;

        Ok(())
    }

    pub fn branches_path(&self) -> PathBuf {
        self.path.join("branches")
    }

    pub fn head_path(&self) -> PathBuf {
        self.branches_path()
            .join(format!("{HEAD_REF_NAME}.{OBJECT_FILE_EXTENSION}"))
    }

    fn branch_path(&self, branch_name: &BranchName) -> PathBuf {
        self.branches_path()
            .join(format!("{branch_name}.{OBJECT_FILE_EXTENSION}"))
    }

    fn current_branch_path(&self) -> PathBuf {
        self.path.join(CURRENT_BRANCH_FILE)
    }
}

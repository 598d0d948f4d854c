//! Checkout migration
//!
//! Reconstitutes a snapshot in the working directory:
//!
//! 1. Every file currently in the working directory is a removal candidate
//! 2. Each snapshot entry drops its path from the candidates; when the file on
//!    disk is missing or its digest differs, the entry's blob is (re)written
//! 3. Whatever candidates remain are deleted
//!
//! Files are compared by content digest only, never by size or timestamp.
//!
//! ## Failure behaviour
//!
//! The migration is not transactional. Every blob the plan needs is checked
//! for existence before the first write, so a corrupt object database aborts
//! with the working directory untouched; an I/O failure while applying can
//! still leave it partially updated.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::status::file_change::{ChangeType, FileChange};
use crate::artifacts::status::inspector::Inspector;
use crate::errors::RepositoryError;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// File system action required for one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a file that does not exist yet
    Add(ObjectId),
    /// Overwrite a file whose content differs
    Modify(ObjectId),
    /// Remove a file absent from the target snapshot
    Delete,
}

impl Action {
    fn change_type(&self) -> ChangeType {
        match self {
            Action::Add(_) => ChangeType::Added,
            Action::Modify(_) => ChangeType::Modified,
            Action::Delete => ChangeType::Deleted,
        }
    }
}

/// Checkout migration planner and executor
pub struct Migration<'r> {
    repository: &'r Repository,
    /// Snapshot to reconstitute
    target: Commit,
    /// Writes in snapshot order followed by deletions
    actions: Vec<(PathBuf, Action)>,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, target: Commit) -> Self {
        Migration {
            repository,
            target,
            actions: Vec::new(),
        }
    }

    pub fn actions(&self) -> &[(PathBuf, Action)] {
        &self.actions
    }

    /// Changes in the order they are reported: additions and modifications
    /// first, then deletions
    pub fn changes(&self) -> Vec<FileChange> {
        self.actions
            .iter()
            .map(|(path, action)| FileChange::new(path.clone(), action.change_type()))
            .collect()
    }

    pub fn plan_changes(&mut self) -> anyhow::Result<()> {
        let inspector = Inspector::new(self.repository);
        let mut files_to_remove = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .collect::<BTreeSet<_>>();

        let mut actions = Vec::new();
        for (path, oid) in self.target.entries_by_path() {
            files_to_remove.remove(&path);

            match inspector.hash_file(&path)? {
                Some(existing) if existing == oid => {}
                Some(_) => actions.push((path, Action::Modify(oid))),
                None => actions.push((path, Action::Add(oid))),
            }
        }

        actions.extend(
            files_to_remove
                .into_iter()
                .map(|path| (path, Action::Delete)),
        );

        tracing::debug!(actions = actions.len(), "checkout planned");
        self.actions = actions;

        Ok(())
    }

    /// Fail with `ObjectNotFound` if any blob needed by the plan is missing
    pub fn verify_objects(&self) -> anyhow::Result<()> {
        let database = self.repository.database();

        for (_, action) in &self.actions {
            if let Action::Add(oid) | Action::Modify(oid) = action
                && !database.contains(oid, ObjectType::Blob)
            {
                return Err(RepositoryError::ObjectNotFound(oid.clone()).into());
            }
        }

        Ok(())
    }

    // Deletions run first so a file can take the place of a directory that
    // is going away, and the other way round.
    pub fn apply_changes(&self) -> anyhow::Result<()> {
        self.verify_objects()?;

        let workspace = self.repository.workspace();

        for (path, _) in self
            .actions
            .iter()
            .filter(|(_, action)| *action == Action::Delete)
        {
            tracing::debug!(?path, "deleting file");
            workspace.remove_file(path)?;
        }

        for (path, action) in &self.actions {
            if let Action::Add(oid) | Action::Modify(oid) = action {
                let blob = self.repository.database().parse_object_as_blob(oid)?;
                tracing::debug!(?path, %oid, "writing file");
                workspace.write_file(path, blob.content())?;
            }
        }

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{ChangeType, FileChange};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type FileSet = BTreeSet<PathBuf>;
pub type HeadTree = BTreeMap<PathBuf, ObjectId>;

#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub(crate) head: Option<ObjectId>,
    pub(crate) changes: Vec<FileChange>,
}

impl StatusInfo {
    pub fn head(&self) -> Option<&ObjectId> {
        self.head.as_ref()
    }

    /// Modified and deleted snapshot paths first, then added paths
    pub fn changes(&self) -> &[FileChange] {
        &self.changes
    }

    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Compare the working directory against the head snapshot without writing anything.
    ///
    /// With no commits yet the head snapshot is empty, so every file is added.
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let head = self.repository.refs().read_head()?;
        let head_tree = self.load_head_tree(head.as_ref())?;
        let mut added_files = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .collect::<FileSet>();

        let inspector = Inspector::new(self.repository);
        let mut changes = Vec::new();

        for (path, oid) in head_tree {
            if added_files.remove(&path) {
                if inspector.is_content_changed(&path, &oid)? {
                    changes.push(FileChange::new(path, ChangeType::Modified));
                }
            } else {
                changes.push(FileChange::new(path, ChangeType::Deleted));
            }
        }

        changes.extend(
            added_files
                .into_iter()
                .map(|path| FileChange::new(path, ChangeType::Added)),
        );

        tracing::debug!(changes = changes.len(), "status computed");
        Ok(StatusInfo { head, changes })
    }

    fn load_head_tree(&self, head: Option<&ObjectId>) -> anyhow::Result<HeadTree> {
        match head {
            Some(oid) => Ok(self
                .repository
                .database()
                .parse_object_as_commit(oid)?
                .entries_by_path()),
            None => Ok(HeadTree::new()),
        }
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::objects::object::hash_content;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::Path;

/// Compares working directory files with stored content by digest only
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Hash the file at `path` the way it would be stored, without storing it.
    ///
    /// None when no regular file exists at that path.
    pub fn hash_file(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        let workspace = self.repository.workspace();
        if !workspace.is_file(path) {
            return Ok(None);
        }

        let content = workspace.read_file(path)?;
        Ok(Some(hash_content(&content)?))
    }

    pub fn is_content_changed(&self, path: &Path, expected: &ObjectId) -> anyhow::Result<bool> {
        Ok(self.hash_file(path)?.as_ref() != Some(expected))
    }
}

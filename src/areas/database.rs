//! Content-addressed object database
//!
//! Blobs live in `objects/<sha>.txt` and commits in `commits/<sha>.txt`, both
//! under the metadata directory. The database is append-only: objects are
//! written once and never updated or removed.

use crate::artifacts::objects::OBJECT_FILE_EXTENSION;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Outcome of storing an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored {
    /// The object was absent and has been written
    Created(ObjectId),
    /// An object with the same content was already present
    Existing(ObjectId),
}

impl Stored {
    pub fn object_id(&self) -> &ObjectId {
        match self {
            Stored::Created(oid) | Stored::Existing(oid) => oid,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Stored::Created(_))
    }
}

#[derive(Debug)]
pub struct Database {
    /// Path to the metadata directory (typically `.fool`)
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> PathBuf {
        self.path.join(ObjectType::Blob.dir_name())
    }

    pub fn commits_path(&self) -> PathBuf {
        self.path.join(ObjectType::Commit.dir_name())
    }

    /// Store an object unless an object with the same ID already exists.
    ///
    /// Storing is idempotent: the returned ID is the same either way.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<Stored> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object.object_path()?);

        if object_path.exists() {
            tracing::debug!(%object_id, kind = %object.object_type(), "object already stored");
            return Ok(Stored::Existing(object_id));
        }

        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).context(format!(
            "Unable to create object directory {}",
            object_dir.display()
        ))?;

        self.write_object(&object_path, object.serialize()?)?;
        tracing::debug!(%object_id, kind = %object.object_type(), "object written");

        Ok(Stored::Created(object_id))
    }

    pub fn contains(&self, object_id: &ObjectId, object_type: ObjectType) -> bool {
        self.object_file(object_id, object_type).is_file()
    }

    pub fn load(&self, object_id: &ObjectId, object_type: ObjectType) -> anyhow::Result<Bytes> {
        let object_path = self.object_file(object_id, object_type);

        // read the object file
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        if !self.contains(object_id, ObjectType::Blob) {
            return Err(RepositoryError::ObjectNotFound(object_id.clone()).into());
        }

        let content = self.load(object_id, ObjectType::Blob)?;
        Blob::deserialize(Cursor::new(content))
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        if !self.contains(object_id, ObjectType::Commit) {
            return Err(RepositoryError::CommitNotFound(object_id.to_string()).into());
        }

        let content = self.load(object_id, ObjectType::Commit)?;
        Commit::deserialize(Cursor::new(content))
            .with_context(|| format!("Unable to parse commit {object_id}"))
    }

    fn object_file(&self, object_id: &ObjectId, object_type: ObjectType) -> PathBuf {
        self.path
            .join(object_type.dir_name())
            .join(object_id.to_path())
    }

    fn write_object(&self, object_path: &Path, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all commits whose ID starts with the given prefix.
    ///
    /// Used to resolve abbreviated commit IDs. Several matches mean the prefix
    /// is ambiguous; no match is an empty vector.
    pub fn find_commits_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let commits_path = self.commits_path();
        if !commits_path.is_dir() {
            return Ok(Vec::new());
        }

        let prefix = prefix.to_ascii_lowercase();
        let mut matches = Vec::new();

        for entry in std::fs::read_dir(&commits_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let file_name_str = file_name.to_string_lossy();

            let Some(stem) = file_name_str
                .strip_suffix(OBJECT_FILE_EXTENSION)
                .and_then(|stem| stem.strip_suffix('.'))
            else {
                continue;
            };

            if stem.starts_with(&prefix)
                && let Ok(oid) = ObjectId::try_parse(stem.to_string())
            {
                matches.push(oid);
            }
        }

        matches.sort();
        Ok(matches)
    }
}

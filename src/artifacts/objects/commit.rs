//! Commit object
//!
//! Commits are immutable snapshots of the working directory. They contain:
//! - The parent commit ID (empty for the first commit)
//! - One entry per file: the blob ID of its content and its relative path
//!
//! ## Format
//!
//! On disk:
//! ```text
//! <parent-sha or empty>
//! <blob-sha> <relative/path>
//! <blob-sha> <relative/path>
//! ```
//!
//! Every line, including the last one, ends with a line break. The commit ID is
//! the SHA-1 of this exact text.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Component, Path, PathBuf};

/// A single `(blob id, path)` pair recorded in a commit
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileEntry {
    pub oid: ObjectId,
    pub path: PathBuf,
}

impl FileEntry {
    fn encode(&self) -> String {
        format!("{} {}\n", self.oid, to_slash_path(&self.path))
    }

    // A line that does not split into a hash and a path is not an entry.
    fn decode(line: &str) -> Option<Self> {
        let (oid, path) = line.split_once(' ')?;
        if path.is_empty() {
            return None;
        }

        // entries may only name files below the working directory root
        if !Path::new(path)
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            tracing::warn!(line, "skipping commit line with a path outside the working directory");
            return None;
        }

        match ObjectId::try_parse(oid.to_string()) {
            Ok(oid) => Some(FileEntry::new(oid, PathBuf::from(path))),
            Err(err) => {
                tracing::warn!(line, %err, "skipping commit line with an invalid object id");
                None
            }
        }
    }
}

/// Slash-separated form of a path that can be recorded in a commit line.
///
/// Fails for paths that would not decode back to the same file: non UTF-8
/// names, names holding a line break, and anything that is not a plain
/// relative path.
pub fn try_to_slash_path(path: &Path) -> anyhow::Result<String> {
    let mut segments = Vec::new();

    for component in path.components() {
        let Component::Normal(name) = component else {
            anyhow::bail!("path {:?} is not relative to the working directory", path);
        };
        let name = name
            .to_str()
            .with_context(|| format!("path {:?} is not valid UTF-8", path))?;
        if name.contains(['\n', '\r']) {
            anyhow::bail!("path {:?} contains a line break", path);
        }

        segments.push(name);
    }

    Ok(segments.join("/"))
}

/// Render a relative path with `/` separators regardless of platform
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    parent: Option<ObjectId>,
    entries: Vec<FileEntry>,
}

impl Commit {
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Entries keyed by path.
    ///
    /// The on-disk format does not prevent two entries for the same path; when
    /// that happens the later entry wins.
    pub fn entries_by_path(&self) -> BTreeMap<PathBuf, ObjectId> {
        self.entries
            .iter()
            .map(|entry| (entry.path.clone(), entry.oid.clone()))
            .collect()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content = match &self.parent {
            Some(parent) => format!("{parent}\n"),
            None => String::from("\n"),
        };

        for entry in &self.entries {
            content.push_str(&entry.encode());
        }

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Commit content is not valid UTF-8")?;

        let mut lines = content.lines();
        let parent = match lines.next().map(str::trim) {
            None | Some("") => None,
            Some(parent) => Some(
                ObjectId::try_parse(parent.to_string())
                    .with_context(|| format!("Invalid parent commit id {parent:?}"))?,
            ),
        };

        let entries = lines.filter_map(FileEntry::decode).collect::<Vec<_>>();

        Ok(Commit::new(parent, entries))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}

//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes.
//! They identify both blobs (file contents) and commits (snapshots).
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d")
//! - Short: First 7 characters (e.g., "aaf4c61")
//!
//! ## Storage
//!
//! Objects are stored flat as `<40-hex>.txt` inside their area directory.

use crate::artifacts::objects::{OBJECT_FILE_EXTENSION, OBJECT_ID_LENGTH};
use std::path::PathBuf;

/// SHA-1 object identifier
///
/// A 40-character lowercase hexadecimal string that uniquely identifies a blob
/// or a commit by its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            anyhow::bail!("Invalid object ID length: {}", id.len());
        }
        if !Self::is_hex(&id) {
            anyhow::bail!("Invalid object ID characters: {}", id);
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Whether the given string could be an abbreviation of an object ID
    pub fn is_valid_prefix(prefix: &str) -> bool {
        !prefix.is_empty() && prefix.len() <= OBJECT_ID_LENGTH && Self::is_hex(prefix)
    }

    fn is_hex(value: &str) -> bool {
        value.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// File name under which the object is stored, e.g. `<oid>.txt`
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.0, OBJECT_FILE_EXTENSION))
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

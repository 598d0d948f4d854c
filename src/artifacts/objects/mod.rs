//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. There are two types:
//!
//! - **Blob**: File content (raw bytes)
//! - **Commit**: Snapshot (parent commit plus `<blob-sha> <path>` entries)
//!
//! Objects are stored without headers: an object's ID is the hash of the exact
//! bytes written to disk.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Extension of every object, commit and ref file in the metadata directory
pub const OBJECT_FILE_EXTENSION: &str = "txt";

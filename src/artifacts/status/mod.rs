//! Working tree status inspection
//!
//! This module compares the working directory against a snapshot.
//!
//! ## Components
//!
//! - `file_change`: Change codes reported per path
//! - `inspector`: Hashing working files without storing them
//! - `status_info`: The three-way comparison and its result

pub mod file_change;
pub mod inspector;
pub mod status_info;

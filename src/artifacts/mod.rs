//! Data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `branch`: Branch names and revision resolution
//! - `checkout`: Reconciling a snapshot with the working directory
//! - `core`: Shared utilities (pager wrapper)
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, commit)
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod log;
pub mod objects;
pub mod status;

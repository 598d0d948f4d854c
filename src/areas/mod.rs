//! Core repository components
//!
//! This module contains the persistent areas a repository is built from:
//!
//! - `database`: Content-addressed store for blobs and commits
//! - `refs`: Branch pointers, head, and the checked-out branch
//! - `repository`: Facade binding the areas to one working directory
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;

//! Command implementations
//!
//! Each user-facing command lives in `porcelain` as an `impl Repository` block.

pub mod porcelain;

//! Checkout planning and application
//!
//! - `migration`: Three-way reconciliation of a snapshot with the working directory

pub mod migration;

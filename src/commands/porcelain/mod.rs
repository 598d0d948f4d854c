//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `commit`: Snapshot the working directory
//! - `checkout`: Restore a snapshot into the working directory
//! - `status`: Show differences between the working directory and head
//! - `log`: Show commit history
//! - `branch`: Create and list branches

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod log;
pub mod status;

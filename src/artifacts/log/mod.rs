//! Commit history traversal
//!
//! - `rev_list`: Iterator following parent links from a starting commit

pub mod rev_list;

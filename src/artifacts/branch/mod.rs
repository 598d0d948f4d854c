//! Branch names and revision resolution

pub mod branch_name;
pub mod revision;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|\.txt$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Name of the file holding the checked-out commit id; no branch may shadow it
pub const HEAD_REF_NAME: &str = "head";

pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => HEAD_REF_NAME,
    "HEAD" => HEAD_REF_NAME,
};

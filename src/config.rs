//! Runtime configuration read from the environment

use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;

/// Name of the metadata directory kept next to the tracked files
pub const METADATA_DIR: &str = ".fool";

pub const DEFAULT_BRANCH: &str = "master";

/// Filter used for log output when `FOOL_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    default_branch: BranchName,
    log_filter: String,
    paging: bool,
}

impl Config {
    pub fn new(default_branch: BranchName) -> Self {
        Config {
            default_branch,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            paging: false,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads FOOL_DEFAULT_BRANCH, FOOL_LOG and NO_PAGER; unset variables fall
    /// back to their defaults.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let default_branch = std::env::var("FOOL_DEFAULT_BRANCH")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        let default_branch = BranchName::try_parse(default_branch)
            .context("FOOL_DEFAULT_BRANCH is not a valid branch name")?;

        let log_filter =
            std::env::var("FOOL_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        let paging = std::env::var_os("NO_PAGER").is_none();

        Ok(Config {
            default_branch,
            log_filter,
            paging,
        })
    }

    pub fn default_branch(&self) -> &BranchName {
        &self.default_branch
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Whether long output may go through the pager (still requires a terminal)
    pub fn paging(&self) -> bool {
        self.paging
    }
}

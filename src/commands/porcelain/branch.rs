use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Create a branch pointing at the current head
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())?;
        let Some(head) = self.refs().read_head()? else {
            anyhow::bail!("cannot create branch {branch_name}: repository has no commits");
        };

        self.refs().create_branch(&branch_name, &head)?;
        tracing::info!(branch = %branch_name, oid = %head, "branch created");

        Ok(())
    }

    /// List branches, marking the checked-out one
    pub fn branches(&self) -> anyhow::Result<()> {
        let current = self.refs().current_branch()?;

        for branch in self.refs().list_branches()? {
            if current.as_ref() == Some(&branch) {
                writeln!(self.writer(), "* {}", branch.to_string().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }
}

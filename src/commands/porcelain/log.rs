use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use std::io::Write;

impl Repository {
    /// Print commit IDs from the checked-out position back to the root commit
    pub fn log(&self) -> anyhow::Result<()> {
        let start = match self.refs().current_branch()? {
            Some(branch) if self.refs().branch_exists(&branch) => {
                Some(self.refs().read_branch(&branch)?)
            }
            _ => self.refs().read_head()?,
        };

        let Some(start) = start else {
            writeln!(self.writer(), "Empty repository.")?;
            return Ok(());
        };

        for entry in RevList::new(self, Some(start)) {
            let (commit_oid, _) = entry?;
            writeln!(self.writer(), "{}", commit_oid)?;
        }

        Ok(())
    }
}

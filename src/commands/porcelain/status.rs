use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn status(&mut self) -> anyhow::Result<()> {
        let status = self.status_info()?;

        match status.head() {
            Some(head) => writeln!(self.writer(), "Revision {}:", head)?,
            None => writeln!(self.writer(), "Revision (none):")?,
        }

        for change in status.changes() {
            writeln!(self.writer(), "\t{}", change)?;
        }

        if status.is_clean() {
            writeln!(self.writer(), "\tNo changes.")?;
        }

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use std::io::Write;

impl Repository {
    /// Reconstitute the working directory from a revision
    ///
    /// Without a target the current head is restored. Checking out a branch
    /// attaches head to it; checking out a commit ID detaches head.
    pub fn checkout(&mut self, target: Option<&str>) -> anyhow::Result<()> {
        let revision = Revision::parse(target.unwrap_or_default());
        let Some(resolved) = revision.resolve(self)? else {
            writeln!(self.writer(), "Repository is empty.")?;
            return Ok(());
        };

        writeln!(self.writer(), "Revision {}:", resolved.oid)?;

        let commit = self.database().parse_object_as_commit(&resolved.oid)?;
        let mut migration = Migration::new(self, commit);
        migration.plan_changes()?;
        migration.apply_changes()?;

        let changes = migration.changes();
        if changes.is_empty() {
            writeln!(self.writer(), "\tNo changes.")?;
        }
        for change in &changes {
            writeln!(self.writer(), "\t{}", change)?;
        }

        let previous_branch = self.refs().current_branch()?;
        self.refs().update_head(&resolved.oid)?;
        self.refs().set_current_branch(resolved.branch.as_ref())?;

        tracing::info!(oid = %resolved.oid, changes = changes.len(), "checkout complete");

        match resolved.branch {
            Some(branch) if previous_branch.as_ref() != Some(&branch) => {
                eprintln!("Switched to branch '{}'", branch);
            }
            Some(_) => {}
            None => eprintln!("HEAD is now detached at {}", resolved.oid.to_short_oid()),
        }

        Ok(())
    }
}

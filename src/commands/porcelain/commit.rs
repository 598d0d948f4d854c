use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, FileEntry, try_to_slash_path};
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn commit(&mut self) -> anyhow::Result<()> {
        let parent = self.refs().read_head()?;
        let files = self.workspace().list_files()?;

        // every name must survive the commit format before anything is stored
        let files = files
            .into_iter()
            .map(|path| {
                let recorded = try_to_slash_path(&path)
                    .context("cannot commit the working directory")?;
                Ok((path, recorded))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut entries = Vec::with_capacity(files.len());
        for (path, recorded) in files {
            let blob = self.workspace().parse_blob(&path)?;
            let stored = self.database().store(&blob)?;

            if stored.is_created() {
                writeln!(
                    self.writer(),
                    "Wrote {} [{}]",
                    recorded,
                    stored.object_id()
                )?;
            } else {
                writeln!(self.writer(), "Unchanged {}", recorded)?;
            }

            entries.push(FileEntry::new(stored.object_id().clone(), path));
        }

        let commit = Commit::new(parent, entries);
        let commit_id = self.database().store(&commit)?.object_id().clone();

        self.refs().update_head(&commit_id)?;
        let branch = self.refs().current_branch()?;
        if let Some(branch) = &branch {
            self.refs().update_branch(branch, &commit_id)?;
        }

        tracing::info!(%commit_id, entries = commit.entries().len(), "commit created");

        let branch = branch.map_or_else(|| "detached".to_string(), |branch| branch.to_string());
        writeln!(self.writer(), "[{} {}]", branch, commit_id)?;

        Ok(())
    }
}

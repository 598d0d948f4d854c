use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use crate::config::{Config, METADATA_DIR};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A working directory together with its `.fool` metadata directory
pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn with_config(
        path: &str,
        writer: Box<dyn std::io::Write>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("working directory {path} does not exist"))?;
        let metadata_path = path.join(METADATA_DIR);

        let database = Database::new(metadata_path.clone().into_boxed_path());
        let workspace = Workspace::new(path.into_boxed_path());
        let refs = Refs::new(
            metadata_path.into_boxed_path(),
            config.default_branch().clone(),
        );

        Ok(Repository {
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Compare the working directory against head
    pub fn status_info(&self) -> anyhow::Result<StatusInfo> {
        Status::new(self).initialize()
    }
}

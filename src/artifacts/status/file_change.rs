use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
}

impl From<&ChangeType> for &str {
    fn from(change: &ChangeType) -> Self {
        match change {
            ChangeType::Added => "[A]",
            ChangeType::Modified => "[M]",
            ChangeType::Deleted => "[D]",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code: &str = self.into();
        write!(f, "{}", code)
    }
}

/// A change to a single path, relative to the working directory root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub(crate) path: PathBuf,
    pub(crate) change: ChangeType,
}

impl FileChange {
    pub fn new(path: PathBuf, change: ChangeType) -> Self {
        FileChange { path, change }
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.change,
            crate::artifacts::objects::commit::to_slash_path(&self.path)
        )
    }
}

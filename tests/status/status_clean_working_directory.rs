use crate::common::command::{committed_repository_dir, get_head_commit_id, run_fool_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn status_clean_working_directory(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    let head_id = get_head_commit_id(repository_dir.path())?;

    run_fool_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(format!("Revision {head_id}:\n\tNo changes.\n"));

    Ok(())
}

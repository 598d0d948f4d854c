use crate::common::command::{repository_dir, run_fool_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn log_empty_repository(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_fool_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout("Empty repository.\n");

    Ok(())
}

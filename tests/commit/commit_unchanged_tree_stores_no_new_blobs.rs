use crate::common::command::{
    count_objects, repository_dir, run_fool_command, run_fool_command_stdout,
};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use fake::Fake;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_unchanged_tree_stores_no_new_blobs(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_count = (1..=5).fake::<usize>();
    write_generated_files(repository_dir.path(), file_count);

    run_fool_command(repository_dir.path(), &["commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote ").count(file_count));
    let objects_after_first_commit = count_objects(repository_dir.path())?;

    let stdout = run_fool_command_stdout(repository_dir.path(), &["commit"])?;

    assert_eq!(count_objects(repository_dir.path())?, objects_after_first_commit);
    assert_eq!(stdout.matches("Unchanged ").count(), file_count);
    assert!(!stdout.contains("Wrote "));

    Ok(())
}

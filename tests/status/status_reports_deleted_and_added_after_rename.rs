use crate::common::command::{fool_commit, repository_dir, run_fool_command};
use crate::common::file::{FileSpec, delete_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn status_reports_deleted_and_added_after_rename(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello".to_string(),
    ));
    let commit_id = fool_commit(repository_dir.path())?;

    delete_file(&repository_dir.path().join("a.txt"));
    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        "world".to_string(),
    ));

    run_fool_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(format!("Revision {commit_id}:\n\t[D] a.txt\n\t[A] b.txt\n"));

    Ok(())
}

use crate::common::command::{
    committed_repository_dir, fool_commit, get_branch_commit_id, get_head_commit_id,
    run_fool_command, run_fool_command_stdout,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_while_detached_only_moves_head(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    let first_id = get_head_commit_id(repository_dir.path())?;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "ONE".to_string(),
    ));
    let second_id = fool_commit(repository_dir.path())?;

    run_fool_command(repository_dir.path(), &["checkout", &first_id])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "new".to_string(),
    ));
    let stdout = run_fool_command_stdout(repository_dir.path(), &["commit"])?;
    let detached_id = get_head_commit_id(repository_dir.path())?;

    assert!(stdout.ends_with(&format!("[detached {detached_id}]\n")));
    assert_eq!(get_branch_commit_id(repository_dir.path(), "master")?, second_id);

    Ok(())
}

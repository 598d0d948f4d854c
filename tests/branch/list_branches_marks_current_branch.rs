use crate::common::command::{committed_repository_dir, get_head_commit_id, run_fool_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_branches_marks_current_branch(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    let head_id = get_head_commit_id(repository_dir.path())?;

    run_fool_command(repository_dir.path(), &["branches"])
        .assert()
        .success()
        .stdout("* master\n");

    run_fool_command(repository_dir.path(), &["branch", "topic"])
        .assert()
        .success();
    run_fool_command(repository_dir.path(), &["branch", "alpha"])
        .assert()
        .success();

    run_fool_command(repository_dir.path(), &["branches"])
        .assert()
        .success()
        .stdout("  alpha\n* master\n  topic\n");

    run_fool_command(repository_dir.path(), &["checkout", "topic"])
        .assert()
        .success();
    run_fool_command(repository_dir.path(), &["branches"])
        .assert()
        .success()
        .stdout("  alpha\n  master\n* topic\n");

    // detached: no branch is marked
    run_fool_command(repository_dir.path(), &["checkout", &head_id])
        .assert()
        .success();
    run_fool_command(repository_dir.path(), &["branches"])
        .assert()
        .success()
        .stdout("  alpha\n  master\n  topic\n");

    Ok(())
}

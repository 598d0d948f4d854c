use crate::common::command::{
    committed_repository_dir, get_branch_commit_id, get_head_commit_id, run_fool_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("topic")]
#[case("feature/login")]
#[case("release-1.0")]
fn create_branch_at_head(
    committed_repository_dir: TempDir,
    #[case] branch_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    run_fool_command(repository_dir.path(), &["branch", branch_name])
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        get_branch_commit_id(repository_dir.path(), branch_name)?,
        get_head_commit_id(repository_dir.path())?
    );

    Ok(())
}

use crate::common::command::{
    committed_repository_dir, fool_commit, get_head_commit_id, metadata_path, run_fool_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_abbreviated_commit_id_detaches_head(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    let first_id = get_head_commit_id(repository_dir.path())?;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "ONE".to_string(),
    ));
    fool_commit(repository_dir.path())?;

    let short_id = &first_id[..7];
    run_fool_command(repository_dir.path(), &["checkout", short_id])
        .assert()
        .success()
        .stdout(format!("Revision {first_id}:\n\t[M] 1.txt\n"))
        .stderr(predicate::str::contains(format!(
            "HEAD is now detached at {short_id}"
        )));

    assert_eq!(read_file(&repository_dir.path().join("1.txt")), "one");
    assert_eq!(get_head_commit_id(repository_dir.path())?, first_id);
    assert_eq!(
        std::fs::read_to_string(metadata_path(repository_dir.path()).join("current_branch.txt"))?,
        ""
    );

    Ok(())
}

use crate::common::command::{fool_commit, repository_dir, run_fool_command};
use crate::common::file::{
    FileSpec, delete_file, snapshot_directory, write_file, write_generated_files,
};
use assert_fs::TempDir;
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_round_trips_generated_tree(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root_files = write_generated_files(repository_dir.path(), (1..=5).fake::<usize>());
    let nested_files = write_generated_files(
        &repository_dir.path().join("nested").join("deeper"),
        (1..=5).fake::<usize>(),
    );
    let expected = snapshot_directory(repository_dir.path());

    let commit_id = fool_commit(repository_dir.path())?;

    // scramble the working directory
    delete_file(&root_files[0].path);
    write_file(FileSpec::new(
        nested_files[0].path.clone(),
        "scrambled".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("stray").join("file.txt"),
        "stray".to_string(),
    ));

    run_fool_command(repository_dir.path(), &["checkout", &commit_id])
        .assert()
        .success();

    assert_eq!(snapshot_directory(repository_dir.path()), expected);

    Ok(())
}

use crate::common::command::{
    count_objects, fool_commit, object_path, read_commit, repository_dir,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const SAME_BLOB_ID: &str = "ff3390557335ba88d37755e41514beb03bc499ec";

#[rstest]
fn commit_identical_files_stores_one_blob(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        repository_dir.path().join("x.txt"),
        "same".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("y.txt"),
        "same".to_string(),
    ));

    let commit_id = fool_commit(repository_dir.path())?;

    assert_eq!(count_objects(repository_dir.path())?, 1);
    assert_eq!(
        std::fs::read_to_string(object_path(repository_dir.path(), SAME_BLOB_ID))?,
        "same"
    );
    assert_eq!(
        read_commit(repository_dir.path(), &commit_id)?,
        format!("\n{SAME_BLOB_ID} x.txt\n{SAME_BLOB_ID} y.txt\n")
    );

    Ok(())
}

use crate::common::command::{fool_commit, metadata_path, repository_dir, run_fool_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const HELLO_BLOB_ID: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";

#[rstest]
fn checkout_ignores_entries_outside_working_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let work_dir = repository_dir.path().join("work");
    write_file(FileSpec::new(work_dir.join("a.txt"), "hello".to_string()));
    fool_commit(&work_dir)?;

    // a hand-edited commit pointing above the working directory
    let forged_id = "e".repeat(40);
    let escaped_path = repository_dir.path().join("escaped.txt");
    write_file(FileSpec::new(
        metadata_path(&work_dir)
            .join("commits")
            .join(format!("{forged_id}.txt")),
        format!(
            "\n{HELLO_BLOB_ID} ../escaped.txt\n{HELLO_BLOB_ID} {}\n{HELLO_BLOB_ID} a.txt\n",
            escaped_path.display()
        ),
    ));

    run_fool_command(&work_dir, &["checkout", &forged_id])
        .assert()
        .success()
        .stdout(format!("Revision {forged_id}:\n\tNo changes.\n"));

    assert!(!escaped_path.exists());
    assert_eq!(read_file(&work_dir.join("a.txt")), "hello");

    Ok(())
}

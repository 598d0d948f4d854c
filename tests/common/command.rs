use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with one commit on `master` holding `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn committed_repository_dir(repository_dir: TempDir) -> TempDir {
    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_fool_command(repository_dir.path(), &["commit"])
        .assert()
        .success();

    repository_dir
}

pub fn run_fool_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("fool").expect("Failed to find fool binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("FOOL_DEFAULT_BRANCH");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a command that must succeed and return its stdout
pub fn run_fool_command_stdout(
    dir: &Path,
    args: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_fool_command(dir, args).assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}

/// Commit and return the new commit ID
pub fn fool_commit(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let stdout = run_fool_command_stdout(dir, &["commit"])?;
    let summary = stdout.lines().last().ok_or("commit printed nothing")?;
    let commit_id = summary
        .trim_end_matches(']')
        .split_whitespace()
        .last()
        .ok_or("commit summary has no id")?
        .to_string();

    Ok(commit_id)
}

pub fn metadata_path(dir: &Path) -> PathBuf {
    dir.join(".fool")
}

pub fn get_head_commit_id(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_path = metadata_path(dir).join("branches").join("head.txt");

    Ok(std::fs::read_to_string(head_path)?.trim().to_string())
}

pub fn get_branch_commit_id(dir: &Path, branch: &str) -> Result<String, Box<dyn std::error::Error>> {
    let branch_path = metadata_path(dir)
        .join("branches")
        .join(format!("{branch}.txt"));

    Ok(std::fs::read_to_string(branch_path)?.trim().to_string())
}

/// Raw text of a commit file
pub fn read_commit(dir: &Path, commit_id: &str) -> Result<String, Box<dyn std::error::Error>> {
    let commit_path = metadata_path(dir)
        .join("commits")
        .join(format!("{commit_id}.txt"));

    Ok(std::fs::read_to_string(commit_path)?)
}

pub fn object_path(dir: &Path, object_id: &str) -> PathBuf {
    metadata_path(dir)
        .join("objects")
        .join(format!("{object_id}.txt"))
}

pub fn count_objects(dir: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let objects_path = metadata_path(dir).join("objects");
    if !objects_path.exists() {
        return Ok(0);
    }

    Ok(std::fs::read_dir(objects_path)?.count())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use fool::areas::repository::Repository;
use fool::artifacts::core::PagerWriter;
use fool::config::Config;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fool",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal single-user version control system",
    long_about = "Snapshots a working directory into a content-addressed store kept in `.fool`, \
    restores earlier snapshots and reports what changed since the last one. \
    There is no staging area: every command works on the whole directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "commit",
        about = "Record a snapshot of the working directory",
        long_about = "This command stores every file of the working directory and records a new commit \
        whose parent is the current head."
    )]
    Commit,
    #[command(
        name = "checkout",
        about = "Restore the working directory from a revision",
        long_about = "This command makes the working directory match a commit. \
        The revision may be a branch name, a full or abbreviated commit ID, or omitted to restore head."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch or commit to check out")]
        target: Option<String>,
    },
    #[command(
        name = "status",
        about = "Show working directory changes since head",
        long_about = "This command lists added, modified and deleted files relative to the head commit."
    )]
    Status,
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists commit IDs from the current position back to the first commit."
    )]
    Log,
    #[command(
        name = "branch",
        about = "Create a new branch at head",
        long_about = "This command creates a branch pointing at the current head commit."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch")]
        name: String,
    },
    #[command(
        name = "branches",
        about = "List all branches",
        long_about = "This command lists every branch, marking the one currently checked out."
    )]
    Branches,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .with_writer(std::io::stderr)
        .init();

    let interactive = std::io::stdout().is_terminal();
    if !interactive {
        colored::control::set_override(false);
    }

    let pwd = std::env::current_dir()?;
    let pwd = pwd.to_string_lossy();

    match &cli.command {
        Commands::Commit => {
            let mut repository =
                Repository::with_config(&pwd, Box::new(std::io::stdout()), config)?;

            repository.commit()?
        }
        Commands::Checkout { target } => {
            let mut repository =
                Repository::with_config(&pwd, Box::new(std::io::stdout()), config)?;

            repository.checkout(target.as_deref())?
        }
        Commands::Status => {
            let mut repository =
                Repository::with_config(&pwd, Box::new(std::io::stdout()), config)?;

            repository.status()?
        }
        Commands::Log => {
            if interactive && config.paging() {
                let pager = minus::Pager::new();
                let repository =
                    Repository::with_config(&pwd, Box::new(PagerWriter::new(pager.clone())), config)?;

                repository.log()?;
                minus::page_all(pager)?;
            } else {
                let repository =
                    Repository::with_config(&pwd, Box::new(std::io::stdout()), config)?;

                repository.log()?
            }
        }
        Commands::Branch { name } => {
            let mut repository =
                Repository::with_config(&pwd, Box::new(std::io::stdout()), config)?;

            repository.branch(name)?
        }
        Commands::Branches => {
            let repository =
                Repository::with_config(&pwd, Box::new(std::io::stdout()), config)?;

            repository.branches()?
        }
    }

    Ok(())
}

use clap::Parser;
use std::path::{Path, PathBuf};

mod bump;
mod error;
mod git;
mod utils;

use crate::error::BumpError;
use crate::git::GitTagStore;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::semver::{Part, Version};

#[derive(Parser)]
#[command(name = "verbump")]
#[command(version)]
#[command(about = "Bump the project version, then commit and tag the release")]
struct Cli {
    /// Version part to increment: major | minor | patch
    part: Part,

    /// Path to the version file
    #[arg(long, default_value = "VERSION")]
    file: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version are not failures; real argument errors exit
            // with 1 instead of clap's default 2.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let logger = Logger::new();
    match run(&cli) {
        Ok(version) => {
            logger.log_message(
                LogLevel::Success,
                &format!("Version bumped to {}", version),
            );
        }
        Err(err @ BumpError::TagConflict(_)) => {
            logger.log_message(LogLevel::Error, &err.to_string());
            std::process::exit(1);
        }
        Err(err) => {
            logger.log_message(LogLevel::Error, &format!("Error: {}", err));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Version, BumpError> {
    let repo_dir = std::env::current_dir()
        .map_err(|e| BumpError::io("resolve", Path::new("."), e))?;
    let store = GitTagStore::new(&repo_dir)?;
    bump::bump_and_tag(&store, &cli.file, cli.part)
}

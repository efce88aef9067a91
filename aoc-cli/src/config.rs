//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Environment variable holding the session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// What the CLI was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print every registered solution
    List,
    /// Solve a single puzzle
    Solve { year: i32, day: i32 },
}

/// Resolved runtime configuration
pub struct Config {
    pub command: Command,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Directory scanned for solution modules, `None` for the executable's directory
    pub solutions_dir: Option<PathBuf>,
    pub solutions_pattern: String,
    /// Session key (zeroized on drop), `None` until prompted
    pub session: Option<Zeroizing<String>>,
    /// Quiet mode
    pub quiet: bool,
    pub log_level: String,
}

impl Config {
    /// Build config from CLI args, taking the session from `AOC_SESSION`
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let session = std::env::var(SESSION_ENV).ok();
        Self::with_session(args, session)
    }

    fn with_session(args: Args, session: Option<String>) -> Result<Self, CliError> {
        let command = match (args.list, args.year, args.day) {
            (true, _, _) => Command::List,
            (false, Some(year), Some(day)) => Command::Solve { year, day },
            _ => return Err(CliError::Config("year and day are required".to_string())),
        };

        Ok(Config {
            command,
            cache_dir: expand_tilde(&args.cache_dir),
            solutions_dir: args.solutions_dir.map(|dir| expand_tilde(&dir)),
            solutions_pattern: args.solutions_pattern,
            session: session.filter(|s| !s.is_empty()).map(Zeroizing::new),
            quiet: args.quiet,
            log_level: args.log_level,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

/// Prompt user for session token
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    eprintln!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session key: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    if s.is_empty() {
        return Err(CliError::Config("Session token is required.".to_string()));
    }
    Ok(Zeroizing::new(s))
}

//! Command-line flags
//!
//! Flags override the config file; anything left unset keeps the file or
//! built-in value.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::CONFIG_ENV;
use crate::types::Config;

#[derive(Debug, Parser)]
#[command(name = "process-mcp")]
#[command(version)]
#[command(about = "MCP server that runs commands behind a fixed launcher prefix")]
pub struct Cli {
    /// TOML config file
    #[arg(long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Path to process and immutable args, prepended to every command (e.g. "sh -c")
    #[arg(long)]
    pub process_path_args: Option<String>,

    /// Forbidden words; commands containing any of them are refused
    #[arg(long, num_args = 1..)]
    pub forbidden_words: Option<Vec<String>>,

    /// Regular expressions removed from command output
    #[arg(long, num_args = 1..)]
    pub filter_patterns: Option<Vec<String>>,

    /// Name of the exec tool (empty disables it)
    #[arg(long)]
    pub exec_name: Option<String>,

    /// Description of the exec tool
    #[arg(long)]
    pub exec_description: Option<String>,

    /// Default timeout for exec commands (seconds)
    #[arg(long)]
    pub exec_timeout: Option<u64>,

    /// Increase verbosity (-v debug, -vv trace). Default is info.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overlay the flags that were given onto `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(launcher) = &self.process_path_args {
            config.process.launcher = launcher.clone();
        }
        if let Some(words) = &self.forbidden_words {
            config.commands.forbidden_words = words.clone();
        }
        if let Some(patterns) = &self.filter_patterns {
            config.output.filter_patterns = patterns.clone();
        }
        if let Some(name) = &self.exec_name {
            config.tool.name = name.clone();
        }
        if let Some(description) = &self.exec_description {
            config.tool.description = description.clone();
        }
        if let Some(timeout) = self.exec_timeout {
            config.process.timeout_secs = timeout;
        }
    }
}

//! Type definitions for process MCP

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// File-level configuration, merged with command-line flags at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub process: ProcessConfig,
    #[serde(default)]
    pub commands: CommandConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub tool: ToolConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessConfig {
    /// Launcher prefix placed in front of every command (e.g. `sh -c`)
    #[serde(default = "default_launcher")]
    pub launcher: String,

    /// Default timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[cfg(windows)]
fn default_launcher() -> String {
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| ".".to_string());
    // Quoted so the launcher split keeps backslashes and spaces intact.
    format!("wsl.exe --cd {}", shell_words::quote(&cwd))
}

#[cfg(not(windows))]
fn default_launcher() -> String {
    "sh -c".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            launcher: default_launcher(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandConfig {
    /// Substrings that cause a command to be refused (advisory only)
    #[serde(default = "default_forbidden_words")]
    pub forbidden_words: Vec<String>,
}

fn default_forbidden_words() -> Vec<String> {
    vec![
        "rm -rf".to_string(),
        "shutdown".to_string(),
        "reboot".to_string(),
    ]
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            forbidden_words: default_forbidden_words(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Regex patterns removed from decoded output
    #[serde(default = "default_filter_patterns")]
    pub filter_patterns: Vec<String>,
}

fn default_filter_patterns() -> Vec<String> {
    vec![
        r"\x07".to_string(),     // bell
        r"\x1b\[25l".to_string(), // hide cursor
    ]
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filter_patterns: default_filter_patterns(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolConfig {
    /// Advertised tool name; empty disables the tool
    #[serde(default = "default_tool_name")]
    pub name: String,

    #[serde(default = "default_tool_description")]
    pub description: String,
}

fn default_tool_name() -> String {
    "exec".to_string()
}

fn default_tool_description() -> String {
    "Executes a static command (ls pwd cat echo ps mkdir cp grep find git sed ...) \
     and returns its result"
        .to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: default_tool_name(),
            description: default_tool_description(),
        }
    }
}

// ============================================================================
// Request / Result Types
// ============================================================================

/// One command to run through the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub command: String,
    /// `None` uses the configured default
    pub timeout_secs: Option<u64>,
}

impl ExecutionRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout_secs: None,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Terminal classification of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    EmptyCommand,
    Blocked,
    Completed,
    TimedOut,
    SpawnError,
}

/// Result of one gateway invocation
///
/// `text` is the payload handed back to the caller. `stdout` and `stderr`
/// hold the decoded, filtered streams and are empty unless the command
/// completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub outcome: Outcome,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub text: String,
}

impl ExecutionResult {
    /// Result for an outcome that never produced process output
    pub fn message(outcome: Outcome, text: impl Into<String>) -> Self {
        Self {
            outcome,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            text: text.into(),
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid launcher '{0}': {1}")]
    InvalidLauncher(String, String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_server() {
        let config = Config::default();
        assert_eq!(config.process.timeout_secs, 60);
        assert_eq!(
            config.commands.forbidden_words,
            vec!["rm -rf", "shutdown", "reboot"]
        );
        assert_eq!(config.output.filter_patterns, vec![r"\x07", r"\x1b\[25l"]);
        assert_eq!(config.tool.name, "exec");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [process]
            launcher = "bash -lc"

            [commands]
            forbidden_words = ["mkfs"]
            "#,
        )
        .unwrap();

        assert_eq!(config.process.launcher, "bash -lc");
        assert_eq!(config.process.timeout_secs, 60);
        assert_eq!(config.commands.forbidden_words, vec!["mkfs"]);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.tool, ToolConfig::default());
    }

    #[test]
    fn test_request_builder() {
        let req = ExecutionRequest::new("ls").with_timeout(5);
        assert_eq!(req.command, "ls");
        assert_eq!(req.timeout_secs, Some(5));
        assert_eq!(ExecutionRequest::new("ls").timeout_secs, None);
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        let json = serde_json::to_string(&Outcome::TimedOut).unwrap();
        assert_eq!(json, "\"timed_out\"");
    }
}

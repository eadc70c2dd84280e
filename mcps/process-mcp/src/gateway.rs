//! Gateway - validates, runs, filters and renders one command
//!
//! Every expected failure (empty command, blocked command, timeout, spawn
//! failure) comes back as an [`ExecutionResult`] with a readable message.
//! Nothing in here returns an error once the gateway is built.

use std::sync::Arc;
use std::time::Instant;

use crate::executor::{Launcher, ProcessExecutor, RunResult};
use crate::filter::OutputFilter;
use crate::guard::CommandGuard;
use crate::render;
use crate::types::{Config, ExecError, ExecutionRequest, ExecutionResult, Outcome};

pub const EMPTY_COMMAND_MESSAGE: &str = "Error: Command not specified.";

fn blocked_message(command: &str) -> String {
    format!(
        "⚠️ This command contains a potentially dangerous operation: {}\n\
         Please reformulate it or explicitly confirm that you want to execute it.",
        command
    )
}

fn timed_out_message(timeout_secs: u64) -> String {
    format!("The command timed out after {} seconds", timeout_secs)
}

fn spawn_error_message(error: &str) -> String {
    format!("Error executing the command: {}", error)
}

// ============================================================================
// Configuration
// ============================================================================

/// Immutable runtime configuration shared by every request
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    executor: ProcessExecutor,
    guard: CommandGuard,
    filter: OutputFilter,
    default_timeout_secs: u64,
}

impl GatewayConfig {
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::from_config(&Config::default())
    }

    /// Compile a loaded [`Config`]: parse the launcher and build the filters
    pub fn from_config(config: &Config) -> Result<Self, ExecError> {
        GatewayConfigBuilder::from_config(config).build()
    }

    pub fn launcher(&self) -> &Launcher {
        self.executor.launcher()
    }

    pub fn guard(&self) -> &CommandGuard {
        &self.guard
    }

    pub fn filter(&self) -> &OutputFilter {
        &self.filter
    }

    pub fn default_timeout_secs(&self) -> u64 {
        self.default_timeout_secs
    }
}

/// Builder for [`GatewayConfig`], starting from the stock defaults
#[derive(Debug, Clone)]
pub struct GatewayConfigBuilder {
    launcher: String,
    forbidden_words: Vec<String>,
    filter_patterns: Vec<String>,
    default_timeout_secs: u64,
}

impl GatewayConfigBuilder {
    fn from_config(config: &Config) -> Self {
        Self {
            launcher: config.process.launcher.clone(),
            forbidden_words: config.commands.forbidden_words.clone(),
            filter_patterns: config.output.filter_patterns.clone(),
            default_timeout_secs: config.process.timeout_secs,
        }
    }

    pub fn launcher(mut self, launcher: impl Into<String>) -> Self {
        self.launcher = launcher.into();
        self
    }

    pub fn forbidden_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn default_timeout_secs(mut self, secs: u64) -> Self {
        self.default_timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<GatewayConfig, ExecError> {
        if self.default_timeout_secs == 0 {
            return Err(ExecError::ConfigError(
                "default timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(GatewayConfig {
            executor: ProcessExecutor::new(Launcher::parse(&self.launcher)?),
            guard: CommandGuard::new(self.forbidden_words),
            filter: OutputFilter::new(&self.filter_patterns)?,
            default_timeout_secs: self.default_timeout_secs,
        })
    }
}

// ============================================================================
// Gateway
// ============================================================================

/// Command execution gateway
///
/// Cheap to clone; clones share the same configuration. Concurrent calls
/// each own their child process and buffers.
#[derive(Debug, Clone)]
pub struct Gateway {
    config: Arc<GatewayConfig>,
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub async fn execute(&self, request: ExecutionRequest) -> ExecutionResult {
        let command = request.command.as_str();

        if command.is_empty() {
            return ExecutionResult::message(Outcome::EmptyCommand, EMPTY_COMMAND_MESSAGE);
        }

        if let Some(word) = self.config.guard.first_match(command) {
            tracing::warn!(command, forbidden = word, "Command blocked");
            return ExecutionResult::message(Outcome::Blocked, blocked_message(command));
        }

        let timeout_secs = request
            .timeout_secs
            .unwrap_or(self.config.default_timeout_secs);
        let started = Instant::now();

        let result = match self.config.executor.run(command, timeout_secs).await {
            RunResult::Completed(output) => {
                let stdout = self.config.filter.apply(&render::decode(&output.stdout));
                let stderr = self.config.filter.apply(&render::decode(&output.stderr));
                let text = render::format_output(output.exit_code, &stdout, &stderr);
                ExecutionResult {
                    outcome: Outcome::Completed,
                    exit_code: output.exit_code,
                    stdout,
                    stderr,
                    text,
                }
            }
            RunResult::TimedOut => {
                ExecutionResult::message(Outcome::TimedOut, timed_out_message(timeout_secs))
            }
            RunResult::SpawnError(e) => {
                tracing::error!(command, "Failed to execute: {}", e);
                ExecutionResult::message(Outcome::SpawnError, spawn_error_message(&e))
            }
        };

        tracing::info!(
            command,
            outcome = ?result.outcome,
            exit_code = ?result.exit_code,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );

        result
    }
}

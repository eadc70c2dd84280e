//! Config file discovery and loading

use std::path::{Path, PathBuf};

use crate::types::{Config, ExecError};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "MCP_PROCESS_CONFIG";

/// Load the file-level config
///
/// An explicit path (from `--config` or [`CONFIG_ENV`]) must exist and parse.
/// Otherwise the first parseable file among [`search_paths`] wins, and
/// without one the built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ExecError> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }

    for path in search_paths() {
        if !path.exists() {
            continue;
        }
        match read_config(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => {
                tracing::warn!("Skipping config {}: {}", path.display(), e);
            }
        }
    }

    tracing::info!("Using default configuration");
    Ok(Config::default())
}

/// Standard locations, highest priority first
///
/// 1. `./mcp-process.toml`
/// 2. `$XDG_CONFIG_HOME/mcp-process/config.toml`
/// 3. `~/.mcp-process.toml`
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("mcp-process.toml")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mcp-process").join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mcp-process.toml"));
    }

    paths
}

fn read_config(path: &Path) -> Result<Config, ExecError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ExecError::ConfigError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [process]
            launcher = "bash -lc"
            timeout_secs = 5

            [tool]
            name = "run"
            "#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.process.launcher, "bash -lc");
        assert_eq!(config.process.timeout_secs, 5);
        assert_eq!(config.tool.name, "run");
        assert_eq!(config.commands.forbidden_words.len(), 3);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ExecError::IoError(_)));
    }

    #[test]
    fn test_explicit_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[process]\ntimeout_secs = \"soon\"").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ExecError::ConfigError(_)));
    }

    #[test]
    fn test_search_paths_start_with_local_file() {
        let paths = search_paths();
        assert_eq!(paths[0], PathBuf::from("mcp-process.toml"));
    }
}

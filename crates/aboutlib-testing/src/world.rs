//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temporary data directory, so tests never touch the
//! user's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment for the `aboutlib` binary.
///
/// # Example
/// ```no_run
/// use aboutlib_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["show", "--about", "Test library. Version 0.0.0"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    format: &'static str,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".aboutlib");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            format: "plain",
        }
    }

    /// Get the data directory path (.aboutlib).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the config file the CLI reads in this world.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Write a config file before running commands.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Switch the global output format to JSON.
    pub fn json(mut self) -> Self {
        self.format = "json";
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(self.format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("ABOUTLIB_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `aboutlib` binary with `args`.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.execute(args, None)
    }

    /// Execute the `aboutlib` binary with `args`, feeding `stdin` to it.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        self.execute(args, Some(stdin))
    }

    #[allow(deprecated)]
    fn execute(&self, args: &[&str], stdin: Option<&str>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("aboutlib")
            .map_err(|e| anyhow::anyhow!("Failed to find aboutlib binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        if let Some(input) = stdin {
            cmd.write_stdin(input.to_string());
        }

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

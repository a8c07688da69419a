//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `hoard` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct HoardCommand {
    args: Vec<String>,
    home: Option<PathBuf>,
}

impl HoardCommand {
    /// Creates a new command for the `hoard` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
        }
    }

    /// Points `HOME` and the XDG directories at `path`.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Sets the `--store` option.
    pub fn store(mut self, path: &Path) -> Self {
        self.args.push("--store".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("hoard").expect("Failed to find hoard binary");
        cmd.env_remove("RUST_LOG");
        if let Some(home) = &self.home {
            cmd.env("HOME", home)
                .env("XDG_CONFIG_HOME", home.join(".config"))
                .env("XDG_DATA_HOME", home.join(".local").join("share"));
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `import` command.
    pub fn import(self, files: &[&Path]) -> Self {
        let files: Vec<String> = files
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        self.args(["import"]).args(files)
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command.
    pub fn show(self, id: i64) -> Self {
        self.args(["show".to_string(), id.to_string()])
    }

    /// Configures for the `search` command.
    pub fn search(self, term: &str) -> Self {
        self.args(["search", term])
    }

    /// Restricts a search to one field.
    pub fn by(self, scope: &str) -> Self {
        self.args(["--by", scope])
    }

    /// Configures for the `tags` command.
    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    /// Configures for the `files` command.
    pub fn files(self) -> Self {
        self.args(["files"])
    }

    /// Configures for the `export` command.
    pub fn export(self, output: &Path) -> Self {
        self.args(["export".to_string(), output.to_string_lossy().to_string()])
    }

    /// Configures for the `restore` command.
    pub fn restore(self, input: &Path) -> Self {
        self.args(["restore".to_string(), input.to_string_lossy().to_string()])
    }

    /// Configures for the `reset` command.
    pub fn reset(self) -> Self {
        self.args(["reset"])
    }

    /// Adds `--format json`.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for HoardCommand {
    fn default() -> Self {
        Self::new()
    }
}

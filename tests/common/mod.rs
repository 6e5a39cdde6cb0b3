//! Common test utilities for assistant-bot CLI tests.
//!
//! `TestEnv` gives every test its own working directory and home, pins
//! "today" and disables color so output is stable.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Date every test runs on unless it overrides `ASSISTANT_BOT_TODAY`
pub const TODAY: &str = "2024-06-15";

/// Result of running the assistant-bot binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Stdout lines parsed as JSON objects
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON: {l}: {e}")))
            .collect()
    }
}

/// Isolated working directory and home for one test
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("create work dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assistant-bot")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// The default book file in the working directory
    pub fn book_path(&self) -> PathBuf {
        self.path("addressbook.toml")
    }

    pub fn read_book(&self) -> String {
        std::fs::read_to_string(self.book_path()).unwrap_or_default()
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create dirs");
        }
        std::fs::write(full, content).expect("write file");
    }

    pub fn write_user_config(&self, content: &str) {
        let path = self.home_dir.path().join(".config/assistant-bot/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("create config dir");
        std::fs::write(path, content).expect("write config");
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("ASSISTANT_BOT_TODAY", TODAY)
            .env("NO_COLOR", "1")
            .env_remove("ASSISTANT_BOT_BOOK")
            .env_remove("ASSISTANT_BOT_BIRTHDAY_WINDOW")
            .env_remove("ASSISTANT_BOT_COLOR")
            .env_remove("ASSISTANT_BOT_LOG")
            .env_remove("RUST_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run a one-shot command
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(args, env_vars)
            .stdin(Stdio::null())
            .output()
            .expect("failed to execute assistant-bot");
        TestResult::from_output(output)
    }

    /// Run an interactive session fed from `input`
    pub fn session(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args, &[])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn assistant-bot");
        child
            .stdin
            .take()
            .expect("stdin piped")
            .write_all(input.as_bytes())
            .expect("write stdin");
        let output = child.wait_with_output().expect("wait for assistant-bot");
        TestResult::from_output(output)
    }
}

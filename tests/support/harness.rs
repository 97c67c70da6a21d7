use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for running the grader binary.
/// The binary runs with the temp directory as its cwd, so the default
/// `checks.json` and `index.html` resolve inside it.
pub struct TestHarness {
    pub dir: TempDir,
    pub grader_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        TestHarness {
            dir: temp_dir,
            grader_binary: PathBuf::from(env!("CARGO_BIN_EXE_grader")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a checks file containing `selectors` as a JSON array.
    pub fn write_checks(&self, name: &str, selectors: &[&str]) -> PathBuf {
        let content = serde_json::to_string(selectors).expect("Failed to encode checks");
        self.write_file(name, &content)
    }

    /// Writes an arbitrary file relative to the harness directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Executes the grader binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.grader_binary)
            .args(args)
            .current_dir(self.path())
            .env_remove("GRADER_QUIET")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run grader binary")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse stdout as JSON, panicking with the raw text if it is not.
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {stdout}"))
}

#[allow(dead_code)]
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

#![allow(clippy::missing_panics_doc, clippy::must_use_candidate)]

use pretty_assertions::assert_eq;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Set by the test binary before any test runs.
pub const BINARY_PATH_VAR: &str = "ZTESTS_BINARY_PATH";

fn binary_path() -> PathBuf {
    env::var_os(BINARY_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| panic!("{BINARY_PATH_VAR} is not set"))
}

pub struct TestScenario {
    pub bin_path: PathBuf,
    pub util_name: String,
}

impl TestScenario {
    pub fn new(util_name: &str) -> Self {
        Self {
            bin_path: binary_path(),
            util_name: util_name.to_string(),
        }
    }

    /// Command for the utility under test.
    pub fn ucmd(&self) -> UCommand {
        UCommand::new(&self.bin_path)
    }
}

/// A single invocation of the binary, built up before [`run`](Self::run).
pub struct UCommand {
    bin_path: PathBuf,
    args: Vec<OsString>,
    env_vars: Vec<(OsString, OsString)>,
}

impl UCommand {
    fn new(bin_path: &Path) -> Self {
        Self {
            bin_path: bin_path.to_path_buf(),
            args: Vec::new(),
            // keep diagnostics in the default language
            env_vars: vec![("LC_ALL".into(), "C".into())],
        }
    }

    pub fn arg<S: AsRef<OsStr>>(&mut self, arg: S) -> &mut Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<S: AsRef<OsStr>>(&mut self, args: &[S]) -> &mut Self {
        for arg in args {
            self.arg(arg);
        }
        self
    }

    pub fn env<K: AsRef<OsStr>, V: AsRef<OsStr>>(&mut self, key: K, value: V) -> &mut Self {
        self.env_vars
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    pub fn run(&mut self) -> CmdResult {
        let output = Command::new(&self.bin_path)
            .args(&self.args)
            .envs(self.env_vars.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .output()
            .unwrap_or_else(|e| panic!("failed to run {}: {e}", self.bin_path.display()));
        CmdResult::from(output)
    }

    /// Run and assert exit code 0.
    pub fn succeeds(&mut self) -> CmdResult {
        let result = self.run();
        result.success();
        result
    }

    /// Run and assert a non-zero exit code.
    pub fn fails(&mut self) -> CmdResult {
        let result = self.run();
        result.failure();
        result
    }

    pub fn fails_with_code(&mut self, code: i32) -> CmdResult {
        let result = self.run();
        result.code_is(code);
        result
    }
}

/// Captured exit status and output streams of a finished command.
pub struct CmdResult {
    code: Option<i32>,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl From<Output> for CmdResult {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

impl CmdResult {
    pub fn code(&self) -> i32 {
        self.code.expect("terminated by a signal")
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stdout_str(&self) -> &str {
        std::str::from_utf8(&self.stdout).expect("stdout is not UTF-8")
    }

    pub fn stderr_str(&self) -> &str {
        std::str::from_utf8(&self.stderr).expect("stderr is not UTF-8")
    }

    pub fn success(&self) -> &Self {
        assert!(
            self.code == Some(0),
            "command failed with {:?}\nstderr = {}",
            self.code,
            String::from_utf8_lossy(&self.stderr)
        );
        self
    }

    pub fn failure(&self) -> &Self {
        assert!(
            self.code != Some(0),
            "command unexpectedly succeeded\nstdout = {}",
            String::from_utf8_lossy(&self.stdout)
        );
        self
    }

    pub fn code_is(&self, expected: i32) -> &Self {
        assert_eq!(self.code(), expected);
        self
    }

    pub fn no_stderr(&self) -> &Self {
        assert!(
            self.stderr.is_empty(),
            "expected empty stderr, got:\n{}",
            String::from_utf8_lossy(&self.stderr)
        );
        self
    }

    pub fn no_stdout(&self) -> &Self {
        assert!(
            self.stdout.is_empty(),
            "expected empty stdout, got:\n{}",
            String::from_utf8_lossy(&self.stdout)
        );
        self
    }

    pub fn stdout_is<T: AsRef<str>>(&self, expected: T) -> &Self {
        assert_eq!(self.stdout_str(), expected.as_ref());
        self
    }

    pub fn stderr_is<T: AsRef<str>>(&self, expected: T) -> &Self {
        assert_eq!(self.stderr_str(), expected.as_ref());
        self
    }

    pub fn stdout_contains<T: AsRef<str>>(&self, needle: T) -> &Self {
        assert!(
            self.stdout_str().contains(needle.as_ref()),
            "'{}' does not contain '{}'",
            self.stdout_str(),
            needle.as_ref()
        );
        self
    }

    pub fn stderr_contains<T: AsRef<str>>(&self, needle: T) -> &Self {
        assert!(
            self.stderr_str().contains(needle.as_ref()),
            "'{}' does not contain '{}'",
            self.stderr_str(),
            needle.as_ref()
        );
        self
    }
}

//! External Command Packager
//!
//! Runs the packager CLI (ng-packagr by default) as a child process:
//!
//! ```text
//! <program> [script] -p <project descriptor> -c <tsconfig> [args...]
//! ```

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{ensure_inputs, PackageRequest, Packager, PackagerError};

/// Packager that shells out to an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPackager {
    program: String,
    script: Option<PathBuf>,
    args: Vec<String>,
    forward_stdout: bool,
}

impl CommandPackager {
    /// Create a packager running `program` directly
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            script: None,
            args: Vec::new(),
            forward_stdout: true,
        }
    }

    /// Script passed as the first argument (e.g. the ng-packagr CLI entry)
    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Extra arguments appended after the project and tsconfig flags
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Whether the child's stdout is forwarded to ours.
    ///
    /// Disabled for `--json` so stdout stays a clean event stream.
    pub fn forward_stdout(mut self, forward: bool) -> Self {
        self.forward_stdout = forward;
        self
    }

    /// Full command line, for logs
    pub fn command_line(&self, request: &PackageRequest) -> Vec<String> {
        let mut line = vec![self.program.clone()];
        if let Some(script) = &self.script {
            line.push(script.display().to_string());
        }
        line.push("-p".to_string());
        line.push(request.project_descriptor.display().to_string());
        line.push("-c".to_string());
        line.push(request.tsconfig.display().to_string());
        line.extend(self.args.iter().cloned());
        line
    }
}

impl Packager for CommandPackager {
    fn name(&self) -> &str {
        &self.program
    }

    fn package(&self, request: &PackageRequest) -> Result<(), PackagerError> {
        ensure_inputs(request)?;

        let line = self.command_line(request);
        tracing::info!(command = %line.join(" "), cwd = %request.project_root.display(), "running packager");

        let mut cmd = Command::new(&self.program);
        cmd.args(&line[1..])
            .current_dir(&request.project_root)
            .stdin(Stdio::null())
            .stderr(Stdio::piped());

        if self.forward_stdout {
            cmd.stdout(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::null());
        }

        let output = cmd.output().map_err(|source| PackagerError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(PackagerError::Exited {
                program: self.program.clone(),
                code: output.status.code(),
                stderr,
            });
        }

        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            tracing::warn!(packager = %self.program, "{}", line);
        }

        Ok(())
    }
}

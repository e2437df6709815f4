//! Installer that shells out to the host project's package managers.

use std::{
    io,
    path::Path,
    process::{Command, Output},
};

use tracing::{debug, info, instrument};
use tuxgen_core::{
    application::{ApplicationError, ports::DependencyInstaller},
    error::TuxResult,
};

/// Lines of stderr kept in an `InstallFailed` reason.
const STDERR_TAIL_LINES: usize = 5;

/// One command run in the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallStep {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `program arg1 arg2`
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs each step in order, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct ProcessInstaller {
    steps: Vec<InstallStep>,
}

impl ProcessInstaller {
    /// `npm install`, then `bower install`.
    pub fn new() -> Self {
        Self::with_steps(vec![
            InstallStep::new("npm", ["install"]),
            InstallStep::new("bower", ["install"]),
        ])
    }

    pub fn with_steps(steps: Vec<InstallStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[InstallStep] {
        &self.steps
    }

    fn run(step: &InstallStep, root: &Path) -> TuxResult<()> {
        debug!(command = %step.display(), "Running install step");

        let output = Command::new(&step.program)
            .args(&step.args)
            .current_dir(root)
            .output()
            .map_err(|e| install_failed(step, spawn_reason(&e)))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(install_failed(step, exit_reason(&output)))
        }
    }
}

impl Default for ProcessInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyInstaller for ProcessInstaller {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn install(&self, root: &Path) -> TuxResult<()> {
        for step in &self.steps {
            Self::run(step, root)?;
        }
        info!(steps = self.steps.len(), "Dependencies installed");
        Ok(())
    }
}

fn install_failed(step: &InstallStep, reason: String) -> tuxgen_core::error::TuxError {
    ApplicationError::InstallFailed {
        command: step.display(),
        reason,
    }
    .into()
}

fn spawn_reason(e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => "command not found".into(),
        _ => format!("could not start: {}", e),
    }
}

fn exit_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");

    match (output.status.code(), tail.is_empty()) {
        (Some(code), true) => format!("exited with status {}", code),
        (Some(code), false) => format!("exited with status {}:\n{}", code, tail),
        (None, _) => "terminated by signal".into(),
    }
}

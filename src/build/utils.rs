use crate::config::{BUILD_DESCRIPTOR, MANIFEST_FILE, SOURCE_DIR};
use crate::error::ProjectError;
use colored::*;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// How much the build/run pipeline prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Banners, echoed commands, and tool output
    #[default]
    Verbose,
    /// No extra output; configure/build stdout is discarded
    Quiet,
}

impl Verbosity {
    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }
}

/// An external program plus its fixed leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    fn display_with(&self, extra: &[&str]) -> String {
        let mut parts = vec![self.program.as_str()];
        parts.extend(self.args.iter().map(String::as_str));
        parts.extend_from_slice(extra);
        parts.join(" ")
    }
}

/// Fails with every missing marker if `root` is not an sbor project.
pub fn validate_project(root: &Path) -> Result<(), ProjectError> {
    let mut missing = Vec::new();
    if !root.join(MANIFEST_FILE).is_file() {
        missing.push(MANIFEST_FILE.to_string());
    }
    if !root.join(BUILD_DESCRIPTOR).is_file() {
        missing.push(BUILD_DESCRIPTOR.to_string());
    }
    if !root.join(SOURCE_DIR).is_dir() {
        missing.push(format!("{}/", SOURCE_DIR));
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProjectError::ProjectInvalid(missing))
    }
}

/// Plain exit code of a finished process; `None` when it was terminated
/// without one.
pub fn exit_code(status: &ExitStatus) -> Option<i32> {
    status.code()
}

/// Runs `tool` with `extra` arguments in `cwd` and waits for it.
///
/// Returns `Ok(())` on a zero exit status, otherwise the exit code (`None`
/// if the tool could not be spawned or was terminated).
pub fn run_tool(
    tool: &ToolCommand,
    extra: &[&str],
    cwd: &Path,
    verbosity: Verbosity,
) -> Result<(), Option<i32>> {
    if verbosity.is_verbose() {
        println!("   Executing: {}", tool.display_with(extra).dimmed());
    }

    let mut cmd = Command::new(&tool.program);
    cmd.args(&tool.args).args(extra).current_dir(cwd);
    if !verbosity.is_verbose() {
        cmd.stdout(Stdio::null());
    }

    match cmd.status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(exit_code(&status)),
        Err(e) => {
            if verbosity.is_verbose() {
                println!("   {} Could not start '{}': {}", "x".red(), tool.program, e);
            }
            Err(None)
        }
    }
}

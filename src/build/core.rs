//! Configure, build, and run a project through external tools.

use super::discover::{ExecutableLocator, FirstExecutable};
use super::utils::{ToolCommand, Verbosity, exit_code, run_tool, validate_project};
use crate::config::BUILD_DIR;
use crate::error::ProjectError;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Configure tool and build tool candidates, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTools {
    pub configure: ToolCommand,
    pub build_candidates: Vec<ToolCommand>,
}

impl Default for BuildTools {
    fn default() -> Self {
        let candidates: &[&str] = if cfg!(target_os = "windows") {
            &["nmake", "mingw32-make", "make"]
        } else {
            &["make"]
        };
        Self {
            configure: ToolCommand::new("cmake"),
            build_candidates: candidates.iter().map(|c| ToolCommand::new(c)).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub tools: BuildTools,
    pub verbosity: Verbosity,
}

// --- CORE: Build Project ---
/// Validates the project, configures it into `build/`, and builds it.
/// Returns the build directory.
///
/// Tools run with the build directory as their working directory; the
/// process working directory is left untouched.
pub fn build_project(root: &Path, options: &BuildOptions) -> Result<PathBuf, ProjectError> {
    let verbose = options.verbosity.is_verbose();

    // 1. Validate
    validate_project(root)?;
    let root = fs::canonicalize(root)?;

    // 2. Build directory
    let build_dir = root.join(BUILD_DIR);
    if build_dir.is_dir() {
        if verbose {
            println!("{} Using existing build directory...", "📁".blue());
        }
    } else {
        if verbose {
            println!("{} Creating build directory...", "📁".blue());
        }
        fs::create_dir(&build_dir)?;
    }

    // 3. Configure
    if verbose {
        println!("{} Configuring project with CMake...", "🔧".cyan());
    }
    let root_arg = root.to_string_lossy();
    run_tool(&options.tools.configure, &[root_arg.as_ref()], &build_dir, options.verbosity)
        .map_err(ProjectError::ConfigureFailed)?;
    if verbose {
        println!("   {} CMake configuration completed.", "✓".green());
    }

    // 4. Build (first candidate that succeeds wins)
    if verbose {
        println!("{} Building project...", "🔨".yellow());
    }
    let mut last_code = None;
    let mut built = false;
    for tool in &options.tools.build_candidates {
        match run_tool(tool, &[], &build_dir, options.verbosity) {
            Ok(()) => {
                built = true;
                break;
            }
            Err(code) => last_code = code,
        }
    }
    if !built {
        return Err(ProjectError::BuildFailed(last_code));
    }
    if verbose {
        println!("   {} Build completed.", "✓".green());
    }

    Ok(build_dir)
}

// --- COMMAND: Build & Run ---
/// Builds the project, then runs the first executable found in `build/`
/// from the project root with `args`. Returns the program's exit code.
pub fn run_project(
    root: &Path,
    options: &BuildOptions,
    args: &[String],
) -> Result<i32, ProjectError> {
    run_project_with(root, options, args, &FirstExecutable)
}

pub fn run_project_with(
    root: &Path,
    options: &BuildOptions,
    args: &[String],
    locator: &dyn ExecutableLocator,
) -> Result<i32, ProjectError> {
    let build_dir = build_project(root, options)?;
    let root = build_dir.parent().unwrap_or(&build_dir).to_path_buf();

    let exe = locator
        .locate(&build_dir)?
        .ok_or_else(|| ProjectError::ExecutableNotFound(build_dir.clone()))?;

    let verbose = options.verbosity.is_verbose();
    if verbose {
        println!("{} Found executable: {}", "🎯".red(), exe.display());
        println!("{} Running: {} {}\n", "🚀".cyan(), exe.display(), args.join(" "));
        print_banner("PROGRAM OUTPUT");
    }

    let status = Command::new(&exe).args(args).current_dir(&root).status()?;

    if verbose {
        println!();
        print_banner("END OUTPUT");
    }

    let Some(code) = exit_code(&status) else {
        if verbose {
            println!("{} Program terminated abnormally", "x".red());
        }
        return Err(ProjectError::ChildAbnormalExit(exe));
    };

    if verbose {
        if code == 0 {
            println!("{} Program completed successfully (exit code: {})", "✓".green(), code);
        } else {
            println!("{} Program exited with error (exit code: {})", "x".red(), code);
        }
    }
    Ok(code)
}

fn print_banner(title: &str) {
    let width = 59;
    println!("╔{}╗", "═".repeat(width));
    println!("║{}║", format!("{:^width$}", title).bold());
    println!("╚{}╝", "═".repeat(width));
}

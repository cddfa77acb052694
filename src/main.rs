//! # sbor CLI Entry Point
//!
//! Parses arguments with clap and routes each subcommand to the library.
//! All console presentation lives here; the library returns values and
//! typed errors.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use inquire::Text;
use std::fs;
use std::path::Path;

use sbor::ProjectError;
use sbor::build::{self, BuildOptions, CleanOutcome, Verbosity};
use sbor::config::{self, Manifest};
use sbor::includes;
use sbor::manifest::{EditOutcome, HeaderKind, ManifestStore};
use sbor::templates;

#[derive(Parser)]
#[command(name = "sbor")]
#[command(about = "C project manager: header manifest, generated include file, CMake build/run", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new C project
    Init {
        /// Project name (prompted when omitted)
        name: Option<String>,
    },
    /// Add a header to sbor.conf and src/include.h
    Add {
        /// Header name (`string` becomes `string.h` for system headers)
        header: String,
        /// Add as a custom (quoted) header, used verbatim
        #[arg(short, long)]
        custom: bool,
    },
    /// Remove a header from sbor.conf and src/include.h
    Remove {
        /// Header name
        header: String,
    },
    /// List declared headers
    List,
    /// Configure and build the project
    Build,
    /// Build and run the project
    Run {
        /// Run without banners; build output is suppressed
        #[arg(short, long, conflicts_with = "verbose")]
        quiet: bool,
        /// Show banners and build output (default)
        #[arg(short, long)]
        verbose: bool,
        /// Arguments passed to the program (`-q`/`-v` anywhere are taken as flags)
        #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Remove the build directory
    Clean,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir().context("Failed to read current directory")?;

    match cli.command {
        Commands::Init { name } => init_project(name),
        Commands::Add { header, custom } => add_header(&root, &header, custom),
        Commands::Remove { header } => remove_header(&root, &header),
        Commands::List => list_headers(&root),
        Commands::Build => build_project(&root),
        Commands::Run {
            quiet,
            verbose,
            args,
        } => {
            let (quiet, args) = run_mode(quiet, verbose, args);
            run_project(&root, quiet, &args)
        }
        Commands::Clean => clean_project(&root),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "sbor", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Pulls `-q`/`--quiet` and `-v`/`--verbose` out of the forwarded
/// arguments wherever they appear; clap stops matching flags after the
/// first positional. Returns the quiet mode and the remaining arguments.
fn run_mode(quiet: bool, verbose: bool, args: Vec<String>) -> (bool, Vec<String>) {
    let mut quiet = quiet;
    let mut verbose = verbose;
    let mut forwarded = Vec::with_capacity(args.len());
    for arg in args {
        match arg.as_str() {
            "-q" | "--quiet" => quiet = true,
            "-v" | "--verbose" => verbose = true,
            _ => forwarded.push(arg),
        }
    }
    (quiet && !verbose, forwarded)
}

/// Prints `err` with a hint and exits with its exit code.
fn fail(root: &Path, err: ProjectError) -> ! {
    eprintln!("{} Error: {}", "x".red(), err);
    match &err {
        ProjectError::ProjectInvalid(missing) => {
            eprintln!("   Make sure you're in a directory created with 'sbor init' that contains:");
            for marker in missing {
                eprintln!("   - {}", marker);
            }
            eprintln!("   Run 'sbor init <project_name>' to create a new project.");
        }
        ProjectError::ConfigureFailed(_) => {
            eprintln!("   Please check your CMakeLists.txt file and ensure CMake is installed.");
        }
        ProjectError::BuildFailed(_) => {
            eprintln!("   Please check for compilation errors above.");
        }
        ProjectError::ExecutableNotFound(_) => {
            let name = config::project_name(root).unwrap_or_else(|| "<project_name>".to_string());
            let ext = if cfg!(target_os = "windows") { ".exe" } else { "" };
            eprintln!("   Expected executable location: build/{}{}", name, ext);
            eprintln!("   Make sure the build was successful.");
        }
        _ => {}
    }
    std::process::exit(err.exit_code());
}

fn add_header(root: &Path, header: &str, custom: bool) -> Result<()> {
    if let Err(e) = build::validate_project(root) {
        fail(root, e);
    }

    let kind = if custom { HeaderKind::Custom } else { HeaderKind::System };
    println!("{} Adding {} header: {}", "📦".blue(), kind, header.bold());

    let store = ManifestStore::open(root);
    let outcome = match kind {
        HeaderKind::System => store.add_system_header(header),
        HeaderKind::Custom => store.add_custom_header(header),
    }
    .unwrap_or_else(|e| fail(root, e));

    let include_path = includes::regenerate(root).unwrap_or_else(|e| fail(root, e));

    match outcome {
        EditOutcome::Added => {
            println!("{} Successfully added {} header: {}", "✓".green(), kind, header);
            println!("   Updated files:");
            println!("   - {}", config::MANIFEST_FILE);
            println!("   - {}", display_relative(root, &include_path));
        }
        EditOutcome::Unchanged => {
            println!("{} Header '{}' is already declared, nothing to do.", "!".yellow(), header);
        }
    }
    Ok(())
}

fn remove_header(root: &Path, header: &str) -> Result<()> {
    if let Err(e) = build::validate_project(root) {
        fail(root, e);
    }

    println!("{} Removing header: {}", "🗑️".red(), header.bold());
    let kind = ManifestStore::open(root)
        .remove_header(header)
        .unwrap_or_else(|e| fail(root, e));
    let include_path = includes::regenerate(root).unwrap_or_else(|e| fail(root, e));

    println!("{} Successfully removed {} header: {}", "✓".green(), kind, header);
    println!("   Updated files:");
    println!("   - {}", config::MANIFEST_FILE);
    println!("   - {}", display_relative(root, &include_path));
    Ok(())
}

fn list_headers(root: &Path) -> Result<()> {
    let (system, custom) = ManifestStore::open(root)
        .read_headers()
        .unwrap_or_else(|e| fail(root, e));

    println!("{}", "System headers:".bold());
    if system.is_empty() {
        println!("   {}", "(none)".dimmed());
    }
    for header in &system {
        println!("   <{}>", header.cyan());
    }

    println!("{}", "Custom headers:".bold());
    if custom.is_empty() {
        println!("   {}", "(none)".dimmed());
    }
    for header in &custom {
        println!("   \"{}\"", header.green());
    }
    Ok(())
}

fn build_project(root: &Path) -> Result<()> {
    println!("{} Building project...\n", "🔨".yellow());
    let options = BuildOptions::default();
    build::build_project(root, &options).unwrap_or_else(|e| fail(root, e));

    println!("\n{} Build successful!", "🎉".green());
    println!("   📍 Binary location: ./{}/", config::BUILD_DIR);
    if let Some(name) = config::project_name(root) {
        println!("   🚀 Run your project with: ./{}/{}", config::BUILD_DIR, name);
    }
    println!("   💡 Or use: {}", "sbor run".bold());
    Ok(())
}

fn run_project(root: &Path, quiet: bool, args: &[String]) -> Result<()> {
    let options = BuildOptions {
        verbosity: if quiet { Verbosity::Quiet } else { Verbosity::Verbose },
        ..BuildOptions::default()
    };
    if !quiet {
        println!("{} Building and running project...\n", "🏃".green());
    }

    match build::run_project(root, &options, args) {
        Ok(code) => std::process::exit(code),
        Err(e) => fail(root, e),
    }
}

fn clean_project(root: &Path) -> Result<()> {
    println!("{} Cleaning build artifacts...", "🧹".cyan());
    match build::clean(root).unwrap_or_else(|e| fail(root, e)) {
        CleanOutcome::Removed => {
            println!("{} Build directory removed.", "✓".green());
            println!("   💡 Run 'sbor build' to rebuild your project.");
        }
        CleanOutcome::AlreadyClean => {
            println!("{} Already clean! No build directory found.", "✨".yellow());
        }
    }
    Ok(())
}

fn init_project(name_opt: Option<String>) -> Result<()> {
    // 1. Name
    let name = match name_opt {
        Some(n) => n,
        None => Text::new("What is your project name?")
            .with_default("my_project")
            .prompt()?,
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        println!("{} Error: Project name cannot be empty", "x".red());
        std::process::exit(1);
    }

    // 2. Directory
    let path = Path::new(&name);
    if path.exists() {
        println!("{} Error: Directory '{}' already exists", "x".red(), name);
        std::process::exit(1);
    }
    let project_name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string();

    println!("{} Creating project: {}", "📁".blue(), name.bold());
    fs::create_dir_all(path.join(config::SOURCE_DIR)).context("Failed to create src directory")?;

    // 3. Files
    let manifest = Manifest::new(&project_name);
    let files = [
        (config::BUILD_DESCRIPTOR.to_string(), templates::cmake_lists(&project_name)),
        ("src/main.c".to_string(), templates::main_c()),
        (
            format!("{}/{}", config::SOURCE_DIR, config::INCLUDE_FILE),
            includes::render(&manifest.includes.system, &manifest.includes.custom),
        ),
        ("README.md".to_string(), templates::readme(&project_name)),
        (".gitignore".to_string(), templates::gitignore()),
        (config::MANIFEST_FILE.to_string(), manifest.to_document()),
    ];
    for (file, content) in &files {
        fs::write(path.join(file), content).with_context(|| format!("Failed to create {}", file))?;
        println!("  {} {}", "✓".green(), file);
    }

    // 4. Next steps
    println!("\n{} Project '{}' created successfully!\n", "✨".green(), name.bold());
    println!("Next steps:");
    println!("  cd {}", name);
    println!("  sbor run");
    Ok(())
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

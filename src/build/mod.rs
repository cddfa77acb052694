mod clean;
mod core;
mod discover;
mod utils;

pub use clean::{CleanOutcome, clean};
pub use core::{BuildOptions, BuildTools, build_project, run_project, run_project_with};
pub use discover::{ExecutableLocator, FirstExecutable};
pub use utils::{ToolCommand, Verbosity, validate_project};

use std::path::PathBuf;

/// Exit code reported when the child process did not exit normally
/// (killed by a signal, for example).
pub const ABNORMAL_EXIT: i32 = -1;

/// Error type for manifest and build operations
#[derive(Debug)]
pub enum ProjectError {
    /// The manifest could not be read
    ManifestRead(PathBuf, std::io::Error),
    /// The manifest could not be written back
    ManifestWrite(PathBuf, std::io::Error),
    /// A header array could not be found in the manifest document
    ArrayNotFound(String),
    /// The header is in neither the system nor the custom list
    HeaderNotFound(String),
    /// The header name cannot be stored in the manifest
    InvalidHeaderName(String),
    /// One or more project markers are missing
    ProjectInvalid(Vec<String>),
    /// The configure tool failed to start or exited non-zero
    ConfigureFailed(Option<i32>),
    /// Every build tool candidate failed
    BuildFailed(Option<i32>),
    /// No runnable file in the build directory
    ExecutableNotFound(PathBuf),
    /// The program was terminated without an exit code
    ChildAbnormalExit(PathBuf),
    /// IO error
    Io(std::io::Error),
}

impl ProjectError {
    /// Process exit code a caller should report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProjectError::ChildAbnormalExit(_) => ABNORMAL_EXIT,
            _ => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code: {}", c),
        None => "could not be started or was terminated".to_string(),
    }
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectError::ManifestRead(path, e) => {
                write!(f, "Failed to read {}: {}", path.display(), e)
            }
            ProjectError::ManifestWrite(path, e) => {
                write!(f, "Failed to write {}: {}", path.display(), e)
            }
            ProjectError::ArrayNotFound(key) => {
                write!(f, "Could not find the '{}' list in the manifest", key)
            }
            ProjectError::HeaderNotFound(name) => {
                write!(f, "Header '{}' is not declared in the manifest", name)
            }
            ProjectError::InvalidHeaderName(name) => {
                write!(f, "Invalid header name: '{}'", name)
            }
            ProjectError::ProjectInvalid(missing) => write!(
                f,
                "Not in a valid sbor project directory (missing: {})",
                missing.join(", ")
            ),
            ProjectError::ConfigureFailed(code) => {
                write!(f, "CMake configuration failed ({})", describe_code(code))
            }
            ProjectError::BuildFailed(code) => {
                write!(f, "Build failed ({})", describe_code(code))
            }
            ProjectError::ExecutableNotFound(dir) => {
                write!(f, "Could not find an executable in {}", dir.display())
            }
            ProjectError::ChildAbnormalExit(exe) => {
                write!(f, "{} terminated abnormally", exe.display())
            }
            ProjectError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProjectError::ManifestRead(_, e)
            | ProjectError::ManifestWrite(_, e)
            | ProjectError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProjectError {
    fn from(e: std::io::Error) -> Self {
        ProjectError::Io(e)
    }
}

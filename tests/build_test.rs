//! Build/run pipeline tests
//!
//! The configure and build tools are replaced with small shell commands so
//! these tests do not need CMake or make installed.

#![cfg(unix)]

use sbor::ProjectError;
use sbor::build::{self, BuildOptions, BuildTools, ToolCommand, Verbosity};
use sbor::config::{BUILD_DESCRIPTOR, BUILD_DIR, MANIFEST_FILE, Manifest, SOURCE_DIR};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn create_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(SOURCE_DIR)).unwrap();
    fs::write(dir.path().join(BUILD_DESCRIPTOR), "project(demo C)\n").unwrap();
    fs::write(
        dir.path().join(MANIFEST_FILE),
        Manifest::new("demo").to_document(),
    )
    .unwrap();
    dir
}

fn shell(script: &str) -> ToolCommand {
    ToolCommand::new("sh").arg("-c").arg(script)
}

fn options(configure: ToolCommand, build_candidates: Vec<ToolCommand>) -> BuildOptions {
    BuildOptions {
        tools: BuildTools {
            configure,
            build_candidates,
        },
        verbosity: Verbosity::Quiet,
    }
}

fn passing() -> BuildOptions {
    options(ToolCommand::new("true"), vec![ToolCommand::new("true")])
}

fn write_program(root: &Path, name: &str, body: &str) {
    let build_dir = root.join(BUILD_DIR);
    fs::create_dir_all(&build_dir).unwrap();
    let path = build_dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_missing_descriptor_is_rejected_before_build_dir() {
    let project = create_project();
    fs::remove_file(project.path().join(BUILD_DESCRIPTOR)).unwrap();

    let result = build::build_project(project.path(), &passing());

    match result {
        Err(ProjectError::ProjectInvalid(missing)) => {
            assert_eq!(missing, vec![BUILD_DESCRIPTOR.to_string()]);
        }
        other => panic!("expected ProjectInvalid, got {:?}", other),
    }
    assert!(!project.path().join(BUILD_DIR).exists());
}

#[test]
fn test_build_creates_and_reuses_build_dir() {
    let project = create_project();
    let build_dir = build::build_project(project.path(), &passing()).unwrap();
    assert!(build_dir.is_dir());
    fs::write(build_dir.join("marker"), "").unwrap();

    build::build_project(project.path(), &passing()).unwrap();
    assert!(build_dir.join("marker").exists());
}

#[test]
fn test_configure_runs_in_build_dir_with_root_argument() {
    let project = create_project();
    // $0 is the project root appended after the script
    let configure = shell("pwd > configured_in; echo \"$0\" > configured_for");
    let opts = options(configure, vec![ToolCommand::new("true")]);

    let build_dir = build::build_project(project.path(), &opts).unwrap();

    let root = fs::canonicalize(project.path()).unwrap();
    let cwd = fs::read_to_string(build_dir.join("configured_in")).unwrap();
    let target = fs::read_to_string(build_dir.join("configured_for")).unwrap();
    assert_eq!(Path::new(cwd.trim()), fs::canonicalize(&build_dir).unwrap());
    assert_eq!(Path::new(target.trim()), root);
}

#[test]
fn test_configure_failure_keeps_working_directory() {
    let project = create_project();
    let before = std::env::current_dir().unwrap();

    let opts = options(ToolCommand::new("false"), vec![ToolCommand::new("true")]);
    let result = build::build_project(project.path(), &opts);

    assert!(matches!(result, Err(ProjectError::ConfigureFailed(Some(1)))));
    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[test]
fn test_configure_tool_missing() {
    let project = create_project();
    let opts = options(
        ToolCommand::new("sbor-missing-configure-tool"),
        vec![ToolCommand::new("true")],
    );
    assert!(matches!(
        build::build_project(project.path(), &opts),
        Err(ProjectError::ConfigureFailed(None))
    ));
}

#[test]
fn test_build_tool_fallback() {
    let project = create_project();
    let opts = options(
        ToolCommand::new("true"),
        vec![
            ToolCommand::new("sbor-missing-build-tool"),
            ToolCommand::new("false"),
            shell("touch built_by_third"),
        ],
    );

    let build_dir = build::build_project(project.path(), &opts).unwrap();
    assert!(build_dir.join("built_by_third").exists());
}

#[test]
fn test_build_failure_reports_last_code() {
    let project = create_project();
    let before = std::env::current_dir().unwrap();
    let opts = options(
        ToolCommand::new("true"),
        vec![ToolCommand::new("false"), shell("exit 4")],
    );

    let result = build::build_project(project.path(), &opts);

    assert!(matches!(result, Err(ProjectError::BuildFailed(Some(4)))));
    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[test]
fn test_run_without_executable() {
    let project = create_project();
    let build_dir = project.path().join(BUILD_DIR);
    fs::create_dir_all(build_dir.join("CMakeFiles")).unwrap();
    fs::write(build_dir.join("CMakeCache.txt"), "").unwrap();
    fs::write(build_dir.join("Makefile"), "all:\n").unwrap();
    fs::write(build_dir.join("cmake_install.cmake"), "").unwrap();

    let result = build::run_project(project.path(), &passing(), &[]);
    assert!(matches!(result, Err(ProjectError::ExecutableNotFound(_))));
}

#[test]
fn test_run_forwards_args_from_project_root() {
    let project = create_project();
    write_program(project.path(), "demo", "echo \"$@\" > run_output\nexit 0");

    let args = vec!["--flag".to_string(), "value".to_string()];
    let code = build::run_project(project.path(), &passing(), &args).unwrap();

    assert_eq!(code, 0);
    let output = fs::read_to_string(project.path().join("run_output")).unwrap();
    assert_eq!(output.trim(), "--flag value");
}

#[test]
fn test_run_forwards_exit_code() {
    let project = create_project();
    write_program(project.path(), "demo", "exit 7");

    let code = build::run_project(project.path(), &passing(), &[]).unwrap();
    assert_eq!(code, 7);
}

#[test]
fn test_run_abnormal_exit() {
    let project = create_project();
    write_program(project.path(), "demo", "kill -9 $$");

    let err = build::run_project(project.path(), &passing(), &[]).unwrap_err();
    assert!(matches!(err, ProjectError::ChildAbnormalExit(_)));
    assert_eq!(err.exit_code(), sbor::error::ABNORMAL_EXIT);
}

#[test]
fn test_custom_locator() {
    struct Named(&'static str);
    impl build::ExecutableLocator for Named {
        fn locate(&self, build_dir: &Path) -> Result<Option<std::path::PathBuf>, ProjectError> {
            let path = build_dir.join(self.0);
            Ok(path.exists().then_some(path))
        }
    }

    let project = create_project();
    write_program(project.path(), "alpha", "exit 1");
    write_program(project.path(), "beta", "exit 2");

    let code = build::run_project_with(project.path(), &passing(), &[], &Named("beta")).unwrap();
    assert_eq!(code, 2);
}

//! End-to-end tests for the `sbor` binary
//!
//! These tests scaffold a project with `sbor init` in a temporary directory
//! and drive the header commands against it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn sbor_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sbor"))
}

fn sbor(cwd: &Path, args: &[&str]) -> Output {
    Command::new(sbor_binary())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to execute sbor")
}

fn init_project(name: &str) -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let output = sbor(temp.path(), &["init", name]);
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let project = temp.path().join(name);
    (temp, project)
}

#[test]
fn test_init_creates_project_files() {
    let (_temp, project) = init_project("hello");

    for file in [
        "CMakeLists.txt",
        "sbor.conf",
        "README.md",
        ".gitignore",
        "src/main.c",
        "src/include.h",
    ] {
        assert!(project.join(file).exists(), "{} was not created", file);
    }

    let include = fs::read_to_string(project.join("src/include.h")).unwrap();
    assert!(include.contains("#include <stdio.h>"));
}

#[test]
fn test_init_refuses_existing_directory() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();
    let output = sbor(temp.path(), &["init", "taken"]);
    assert!(!output.status.success());
}

#[test]
fn test_add_and_remove_headers() {
    let (_temp, project) = init_project("headers");

    assert!(sbor(&project, &["add", "string"]).status.success());
    assert!(sbor(&project, &["add", "util.h", "-c"]).status.success());

    let include = fs::read_to_string(project.join("src/include.h")).unwrap();
    assert!(include.contains("#include <string.h>"));
    assert!(include.contains("#include \"util.h\""));

    assert!(sbor(&project, &["remove", "string"]).status.success());
    assert!(sbor(&project, &["remove", "util.h"]).status.success());

    let include = fs::read_to_string(project.join("src/include.h")).unwrap();
    assert!(!include.contains("string.h"));
    assert!(!include.contains("util.h"));
}

#[test]
fn test_remove_unknown_header_fails() {
    let (_temp, project) = init_project("unknown");
    let output = sbor(&project, &["remove", "nothere"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_list_shows_headers() {
    let (_temp, project) = init_project("listing");
    let output = sbor(&project, &["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stdio.h"));
    assert!(stdout.contains("stdlib.h"));
}

#[test]
fn test_commands_outside_project_fail() {
    let temp = tempfile::tempdir().unwrap();
    for args in [&["add", "string"][..], &["build"][..], &["clean"][..]] {
        let output = sbor(temp.path(), args);
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
    }
    assert!(!temp.path().join("build").exists());
}

#[test]
fn test_clean_removes_build_dir() {
    let (_temp, project) = init_project("cleaning");
    fs::create_dir_all(project.join("build").join("CMakeFiles")).unwrap();

    assert!(sbor(&project, &["clean"]).status.success());
    assert!(!project.join("build").exists());
    assert!(sbor(&project, &["clean"]).status.success());
}

//! # sbor - C Project Manager
//!
//! sbor keeps a small manifest (`sbor.conf`) of the headers a C project
//! uses, regenerates `src/include.h` from it, and drives CMake to build and
//! run the project.
//!
//! ## Quick Start
//!
//! ```bash
//! sbor init my_project
//! cd my_project
//! sbor add string
//! sbor run
//! ```
//!
//! ## Module Organization
//!
//! - [`manifest`] - Locating and editing header lists in `sbor.conf`
//! - [`includes`] - Generation of `src/include.h`
//! - [`build`] - Configure, build, and run through CMake
//! - [`config`] - Project file conventions and the typed manifest

/// Configure/build/run orchestration.
pub mod build;

/// Project file names and the typed manifest.
pub mod config;

/// Error type shared by the library.
pub mod error;

/// Aggregated include file generation.
pub mod includes;

/// Header manifest editing.
pub mod manifest;

/// Starter files for new projects.
pub mod templates;

pub use error::ProjectError;

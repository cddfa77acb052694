//! Header manifest (`sbor.conf`) editing.
//!
//! - **Locating**: find the text span of `includes.system` / `includes.custom`
//! - **List edits**: add/remove a quoted entry with correct comma placement
//! - **Store**: read-modify-write cycles over the whole document
//!
//! Edits are surgical splices into the original text so user formatting
//! survives. Documents whose punctuation does not match the anchored lookup
//! are handled through the typed [`Manifest`](crate::config::Manifest) instead.

pub mod list;
pub mod locate;
mod store;

pub use locate::{KeyPath, LocatedArray, locate};
pub use store::{EditOutcome, HeaderKind, ManifestStore};

//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`document`]: loading the text of a document
//! - [`interaction`]: asking the user for missing input
//!
//! These ports keep the use cases independent of the filesystem and of the
//! terminal.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod document;
pub mod interaction;

pub use document::DocumentSource;
pub use interaction::{Preset, UserInteraction};

//! Upload handling, classification and preview
//!
//! The upload boundary hands this module a complete batch of
//! `{name, size, content}` triples; it hands back a classification record
//! and, on request, a previewable document. Everything here is pure.

pub mod classify;
pub mod files;
pub mod preview;

pub use classify::{Project, ProjectKind, classify};
pub use files::{UploadedFile, decode_batch};
pub use preview::{LaunchError, compose_preview, escape_html, launch_island};

//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`documents`]: Acquisition of the title→content document set
//! - [`report`]: Destination for the sorted report lines
//!
//! These ports allow the domain and use case layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod documents;
pub mod report;

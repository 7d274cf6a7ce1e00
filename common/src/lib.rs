//! # Abacus Common
//!
//! Types shared by every crate of the workspace.
//!
//! * **[`config`]**: runtime options assembled by the binary.
//! * **[`error`]**: the failure conditions of the arithmetic core.

pub mod config;
pub mod error;

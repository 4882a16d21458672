//! forge
//!
//! Abstraction for repository hosting services.
//!
//! # Architecture
//!
//! The `RepositoryHost` trait defines what callers of the parser need from
//! a host: confirming that a parsed reference exists, and listing the
//! accounts a team can be matched against. Host failures never affect
//! parsing; a reference is always parsed locally first.
//!
//! # Modules
//!
//! - `traits`: Core `RepositoryHost` trait and response types
//! - [`github`]: GitHub implementation using the REST API
//! - [`mock`]: Mock implementation for deterministic testing

pub mod github;
pub mod mock;
mod traits;

pub use traits::*;

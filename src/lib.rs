//! reporef - Repository references from free-form input
//!
//! reporef turns whatever a user pastes into an "import repository" box
//! (`owner/name`, an HTTPS URL, a bare `github.com/...` link, or an SSH
//! clone URL) into a validated owner/name pair, and matches team names to
//! the hosting accounts a user belongs to.
//!
//! # Architecture
//!
//! - [`core`] - Parsing, similarity scoring, matching, configuration
//! - [`forge`] - Abstraction for repository hosts (GitHub)
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output utilities
//!
//! # Guarantees
//!
//! 1. Parsing is pure: the same input always yields the same result
//! 2. Parsing never panics; every malformed input is a rejection
//! 3. A produced reference always has a non-empty owner and name without `/`
//! 4. Hosts are only contacted with references that already parsed

pub mod cli;
pub mod core;
pub mod forge;
pub mod ui;

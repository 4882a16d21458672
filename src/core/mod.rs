//! core
//!
//! Core domain types and algorithms for reporef.
//!
//! # Modules
//!
//! - [`reference`] - Repository reference parsing
//! - [`similarity`] - Dice-coefficient string similarity
//! - [`matching`] - Fuzzy account matching
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Parsing and matching are pure and synchronous
//! - Invalid references cannot be constructed
//! - Rejection never surfaces as a panic

pub mod config;
pub mod matching;
pub mod reference;
pub mod similarity;

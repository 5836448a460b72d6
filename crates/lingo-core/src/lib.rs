//! # lingo-core
//!
//! Core types, traits, configuration, and error handling shared by the
//! Lingo crates.

pub mod config;
pub mod error;
pub mod language;
pub mod traits;

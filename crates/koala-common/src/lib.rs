//! Common utilities for the Koala style declaration tools.
//!
//! This crate provides shared infrastructure used by the command-line front end:
//! - **Warning System** - colored, deduplicated diagnostics on stderr

pub mod warning;

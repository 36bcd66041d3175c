//! CLI command implementations.

pub mod backends;
pub mod common;
pub mod maze;
pub mod version;
pub mod walk;

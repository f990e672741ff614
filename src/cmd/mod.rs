//! CLI command implementations.

pub mod complete;

pub use complete::cmd_complete;

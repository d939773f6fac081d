//! CLI command implementations

pub mod chunk;
pub mod init;

//! CLI command implementations

pub mod letter;
pub mod receipt;
pub mod teachers;
pub mod utils;

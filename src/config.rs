//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Roster file name. The trailing version tracks the storage layout version
/// so a future format change can live alongside the old file.
pub const ROSTER_FILE: &str = "teachers-v1.json";

/// Get the formal-forge data directory
/// - macOS: ~/Library/Application Support/formal-forge/
/// - Linux: ~/.local/share/formal-forge/
/// - Windows: %APPDATA%/formal-forge/
pub fn data_dir() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("formal-forge"))
}

/// Get the path of the teacher roster file
pub fn roster_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(ROSTER_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve() {
        // These should not panic
        let _ = data_dir();
        let _ = roster_path();
    }

    #[test]
    fn test_roster_path_ends_with_file_name() {
        if let Ok(path) = roster_path() {
            assert!(path.ends_with(ROSTER_FILE));
        }
    }
}

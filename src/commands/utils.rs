//! Shared utilities for commands

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

/// Output format for rendered documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Html,
    Text,
}

impl RenderFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" => Some(Self::Html),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Write a rendered document to a file, or print it when no path is given
pub fn write_document(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create: {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            eprintln!("{} {}", "Wrote:".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

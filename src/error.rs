use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("No input files provided")]
    EmptyInput,
    #[error("At least one pattern must be provided")]
    NoPatterns,
    #[error("No files found matching the patterns: {}", .patterns.join(", "))]
    NoMatches { patterns: Vec<String> },
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] globset::Error),
    #[error("Cannot use an input file as the output destination: {}", .output.display())]
    Conflict { output: PathBuf },
    #[error("Refusing to write into the protected src directory: {}", .output.display())]
    ProtectedPath { output: PathBuf },
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, #[source] source: io::Error },
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, #[source] source: io::Error },
    #[error("Failed to write output file {}: {source}", .path.display())]
    Write { path: PathBuf, #[source] source: io::Error },
}

pub type Result<T> = std::result::Result<T, GatherError>;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockGenError {
    #[error("Project analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Docker configuration generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid project path '{path}': {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("Failed to read environment file {file}: {reason}")]
    EnvFileRead { file: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to write {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, DockGenError>;

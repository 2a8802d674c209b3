// Service error types
// Configuration errors and propagated I/O failures

use std::path::PathBuf;
use thiserror::Error;

/// Result type for service operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while resolving a job configuration or generating
/// artifacts from it
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target {} not present in path", .0.display())]
    MissingTarget(PathBuf),

    #[error("{reference} used in {} but not defined in Jobfile tree", .fragment.display())]
    UndefinedReference {
        reference: &'static str,
        fragment: PathBuf,
    },

    #[error("node directory {} does not exist in tree", .0.display())]
    NodeNotInTree(PathBuf),

    #[error("working directory {} is not under base directory {}", .workdir.display(), .basedir.display())]
    WorkdirOutsideTree { basedir: PathBuf, workdir: PathBuf },

    #[error("failed to parse {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

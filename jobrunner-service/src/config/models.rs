// Configuration Models
// Per-node Jobfile schema and the resolved job configuration

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Name of the per-node configuration file
pub const JOBFILE_NAME: &str = "Jobfile";

/// One node's configuration file, as written on disk (TOML).
///
/// Every field is optional; a node contributes only what it declares.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Jobfile {
    #[serde(default)]
    pub job: JobTable,

    /// Scheduler directives. The on-disk group is spelled `schedular`;
    /// the misspelling is part of the established file format.
    #[serde(default)]
    pub schedular: SchedularTable,
}

/// The `[job]` table of a Jobfile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobTable {
    /// Shell fragments concatenated into job.setup, relative to the node
    #[serde(default)]
    pub setup: Vec<String>,

    /// TOML fragments merged into job.input, relative to the node
    #[serde(default)]
    pub input: Vec<String>,

    /// Shell fragments concatenated into job.submit, relative to the node
    #[serde(default)]
    pub submit: Vec<String>,

    /// Path job.target should link to
    pub target: Option<String>,

    /// Files eligible for removal during cleanup, relative to the node
    #[serde(default)]
    pub clean: Vec<String>,
}

/// The `[schedular]` table of a Jobfile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchedularTable {
    /// Scheduler directive lines placed at the top of job.submit
    #[serde(default)]
    pub options: Vec<String>,
}

impl Jobfile {
    /// Parse a Jobfile from a file path
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::parse_str(&content).map_err(|message| ConfigError::Malformed {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a Jobfile from a TOML string
    pub fn parse_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

/// The fully resolved job configuration for one working directory.
///
/// Assembled once per invocation by folding every Jobfile on the
/// base-to-working node chain; artifact generation only reads it.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Root of the directory tree
    pub basedir: PathBuf,

    /// Leaf directory artifacts are generated into
    pub workdir: PathBuf,

    /// Setup fragment paths in base-to-working order
    pub setup: Vec<PathBuf>,

    /// Input fragment paths in base-to-working order
    pub input: Vec<PathBuf>,

    /// Submit fragment paths in base-to-working order
    pub submit: Vec<PathBuf>,

    /// Path job.target links to, if any node declared one
    pub target: Option<PathBuf>,

    /// Paths eligible for removal during cleanup
    pub clean: Vec<PathBuf>,

    /// Scheduler directive lines in base-to-working order
    pub schedular_options: Vec<String>,
}

impl JobConfig {
    /// Create an empty configuration for the given tree endpoints
    pub fn new(basedir: impl Into<PathBuf>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
            workdir: workdir.into(),
            setup: Vec::new(),
            input: Vec::new(),
            submit: Vec::new(),
            target: None,
            clean: Vec::new(),
            schedular_options: Vec::new(),
        }
    }
}

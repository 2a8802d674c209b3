// Configuration module
// Jobfile parsing and hierarchical job configuration assembly

pub mod models;
pub mod resolver;

pub use models::{JobConfig, Jobfile, JOBFILE_NAME};
pub use resolver::resolve_config;

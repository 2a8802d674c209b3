// Jobrunner Service Library
// Hierarchical job configuration and submission artifact generation

pub mod artifacts;
pub mod config;
pub mod error;
pub mod nodes;

// Re-export commonly used types
pub use error::{ConfigError, ConfigResult};

// Re-export configuration types
pub use config::{resolve_config, JobConfig, Jobfile};

// Re-export node resolution
pub use nodes::node_list;

// Re-export artifact operations
pub use artifacts::{
    create_input_file, create_setup_file, create_submit_file, create_target_file,
    remove_node_files,
};

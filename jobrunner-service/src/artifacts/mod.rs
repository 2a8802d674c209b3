// Artifacts Module
// Emitters for the generated job.* files and node cleanup

pub mod clean;
pub mod input;
pub mod setup;
pub mod submit;
pub mod target;

pub use clean::remove_node_files;
pub use input::create_input_file;
pub use setup::create_setup_file;
pub use submit::create_submit_file;
pub use target::create_target_file;

use std::path::Path;

/// File names the generator owns inside a node directory
pub const GENERATED_FILES: [&str; 5] = [
    "job.input",
    "job.setup",
    "job.submit",
    "job.target",
    "job.output",
];

/// Format the `cd` preamble written before each fragment's contents
pub(crate) fn chdir_preamble(fragment: &Path) -> String {
    let nodedir = fragment.parent().unwrap_or_else(|| Path::new("."));
    format!("\ncd {}\n\n", nodedir.display())
}

/// Format the JobWorkDir variable definition shared by setup and submit
/// scripts
pub(crate) fn workdir_variable(workdir: &Path) -> String {
    format!("\nJobWorkDir=\"{}\"\n", workdir.display())
}

// Setup File Emitter
// Concatenates per-node setup fragments into an executable job.setup

use std::fs;

use crate::artifacts::{chdir_preamble, workdir_variable};
use crate::config::JobConfig;
use crate::error::ConfigResult;

/// Write `job.setup` in the working directory.
///
/// The script aborts on the first failing command (`set -e`) and defines
/// `JobWorkDir` before any fragment runs. Each fragment is preceded by a
/// `cd` into its node directory and copied verbatim; placeholder tokens
/// inside fragments are left for the shell to expand. An existing
/// `job.setup` is overwritten.
pub fn create_setup_file(config: &JobConfig) -> ConfigResult<()> {
    let mut script = String::new();
    script.push_str("#!/bin/bash\n");
    script.push_str("set -e\n");
    script.push_str(&workdir_variable(&config.workdir));

    for fragment in &config.setup {
        script.push_str(&chdir_preamble(fragment));
        script.push_str(&fs::read_to_string(fragment)?);
    }

    fs::write(config.workdir.join("job.setup"), script)?;
    Ok(())
}

// Submit File Emitter
// Builds job.submit from scheduler directives and per-node submit fragments

use std::fs;
use std::path::Path;

use crate::artifacts::{chdir_preamble, workdir_variable};
use crate::config::JobConfig;
use crate::error::{ConfigError, ConfigResult};

/// Write `job.submit` in the working directory.
///
/// Scheduler directive lines come first so the batch system sees them
/// before any executable content. Unlike `job.setup` there is no `set -e`:
/// schedulers are allowed to print non-fatal warnings. Fragment lines are
/// checked for references to `job.target` or `job.input` that the
/// configuration never defines; the check is line-oriented substring
/// matching with trailing `#` comments ignored, not script parsing.
pub fn create_submit_file(config: &JobConfig) -> ConfigResult<()> {
    let mut script = String::new();
    script.push_str("#!/bin/bash\n");

    script.push('\n');
    for option in &config.schedular_options {
        script.push_str(option);
        script.push('\n');
    }

    script.push_str(&workdir_variable(&config.workdir));

    for fragment in &config.submit {
        script.push_str(&chdir_preamble(fragment));

        let contents = fs::read_to_string(fragment)?;
        for line in contents.lines() {
            check_line(line, config, fragment)?;
            script.push_str(line);
            script.push('\n');
        }
    }

    fs::write(config.workdir.join("job.submit"), script)?;
    Ok(())
}

/// Reject a line that references an artifact the configuration never
/// defines. Only the portion before a `#` comment is inspected.
fn check_line(line: &str, config: &JobConfig, fragment: &Path) -> ConfigResult<()> {
    let code = line.split('#').next().unwrap_or("");

    if code.contains("job.target") && config.target.is_none() {
        return Err(ConfigError::UndefinedReference {
            reference: "job.target",
            fragment: fragment.to_path_buf(),
        });
    }

    if code.contains("job.input") && config.input.is_empty() {
        return Err(ConfigError::UndefinedReference {
            reference: "job.input",
            fragment: fragment.to_path_buf(),
        });
    }

    Ok(())
}

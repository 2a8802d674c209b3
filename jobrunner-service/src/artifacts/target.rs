// Target File Emitter
// Links job.target in the working directory to the configured target path

use std::fs;
use std::io;

use crate::config::JobConfig;
use crate::error::{ConfigError, ConfigResult};

/// Create the `job.target` symlink in the working directory.
///
/// Fails before touching the filesystem when the configured target path
/// does not exist. An existing link is removed first and the replacement
/// is remove-then-link, not an atomic rename: a crash between the two
/// steps leaves no `job.target` behind. With no target configured this is
/// a no-op.
pub fn create_target_file(config: &JobConfig) -> ConfigResult<()> {
    let target = match &config.target {
        Some(t) if !t.as_os_str().is_empty() => t,
        _ => return Ok(()),
    };

    if !target.exists() {
        return Err(ConfigError::MissingTarget(target.clone()));
    }

    let link = config.workdir.join("job.target");
    match fs::remove_file(&link) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    std::os::unix::fs::symlink(target, &link)?;

    Ok(())
}

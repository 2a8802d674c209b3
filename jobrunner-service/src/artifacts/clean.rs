// Node Cleanup
// Removes generated and configured transient files from one node directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::artifacts::GENERATED_FILES;
use crate::config::JobConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::nodes::node_list;

/// Remove generated artifacts and configured `clean` entries from
/// `nodedir`.
///
/// `nodedir` must be a member of the base-to-working node chain; anything
/// else is a configuration error and nothing is touched. The removal set
/// is the intersection of the directory's immediate files with the
/// configured `clean` paths plus the well-known generated names resolved
/// under the node directory. Subdirectories are never entered.
///
/// All paths are handled absolutely, so the process working directory is
/// left alone on every exit path, including a failed deletion partway
/// through.
pub fn remove_node_files(config: &JobConfig, nodedir: &Path) -> ConfigResult<()> {
    let nodes = node_list(&config.basedir, &config.workdir)?;
    if !nodes.iter().any(|node| node == nodedir) {
        return Err(ConfigError::NodeNotInTree(nodedir.to_path_buf()));
    }

    let mut reference: HashSet<PathBuf> = config.clean.iter().cloned().collect();
    for name in GENERATED_FILES {
        reference.insert(nodedir.join(name));
    }

    for entry in fs::read_dir(nodedir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        // job.target is a symlink, so those count as files here
        if !file_type.is_file() && !file_type.is_symlink() {
            continue;
        }
        if reference.contains(&entry.path()) {
            fs::remove_file(entry.path())?;
        }
    }

    Ok(())
}

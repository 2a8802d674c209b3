// Node Resolution
// Decomposes the base-to-working directory chain into an ordered node list

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Resolve the ordered list of node directories between `basedir` and
/// `workdir`, inclusive of both endpoints.
///
/// The list is pure path decomposition: no directory is required to exist
/// on disk. When `basedir` and `workdir` are the same directory the list
/// has a single element.
///
/// # Arguments
/// * `basedir` - Root of the directory tree
/// * `workdir` - Leaf directory artifacts are generated into
///
/// # Returns
/// Directories from base to working, root first, or an error when
/// `workdir` does not lie under `basedir`.
pub fn node_list(basedir: &Path, workdir: &Path) -> ConfigResult<Vec<PathBuf>> {
    let relative = workdir
        .strip_prefix(basedir)
        .map_err(|_| ConfigError::WorkdirOutsideTree {
            basedir: basedir.to_path_buf(),
            workdir: workdir.to_path_buf(),
        })?;

    let mut nodes = vec![basedir.to_path_buf()];
    let mut current = basedir.to_path_buf();
    for component in relative.components() {
        current.push(component);
        nodes.push(current.clone());
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_list_nested() {
        let nodes = node_list(Path::new("/base"), Path::new("/base/a/b")).unwrap();
        assert_eq!(
            nodes,
            vec![
                PathBuf::from("/base"),
                PathBuf::from("/base/a"),
                PathBuf::from("/base/a/b"),
            ]
        );
    }

    #[test]
    fn test_node_list_single_node() {
        let nodes = node_list(Path::new("/base"), Path::new("/base")).unwrap();
        assert_eq!(nodes, vec![PathBuf::from("/base")]);
    }

    #[test]
    fn test_node_list_preserves_order() {
        let nodes = node_list(Path::new("/base"), Path::new("/base/x/y/z")).unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes.first().unwrap(), Path::new("/base"));
        assert_eq!(nodes.last().unwrap(), Path::new("/base/x/y/z"));
    }

    #[test]
    fn test_node_list_workdir_outside_tree() {
        let err = node_list(Path::new("/base"), Path::new("/elsewhere/a")).unwrap_err();
        assert!(matches!(err, ConfigError::WorkdirOutsideTree { .. }));
    }
}

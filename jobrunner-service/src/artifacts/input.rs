// Input File Emitter
// Merges TOML input fragments into a flat group.key = value parameter file

use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use toml::Value;

use crate::config::JobConfig;
use crate::error::{ConfigError, ConfigResult};

/// Write `job.input` in the working directory from the merged input
/// fragments.
///
/// Fragments merge by top-level group in list order; a key defined by a
/// later fragment replaces the earlier value. Groups appear in the order
/// they were first seen across the merge, with keys sorted
/// lexicographically within each group. String values are double-quoted,
/// other scalars keep their TOML text.
///
/// When the fragment list is empty nothing is written: a stale
/// `job.input` from a previous run is deliberately left in place.
pub fn create_input_file(config: &JobConfig) -> ConfigResult<()> {
    if config.input.is_empty() {
        return Ok(());
    }

    let merged = merge_fragments(&config.input)?;

    let mut out = String::new();
    for (group, entries) in &merged {
        let mut keys: Vec<&String> = entries.keys().collect();
        keys.sort();
        for key in keys {
            match &entries[key] {
                Value::String(s) => out.push_str(&format!("{}.{} = \"{}\"\n", group, key, s)),
                value => out.push_str(&format!("{}.{} = {}\n", group, key, value)),
            }
        }
    }

    fs::write(config.workdir.join("job.input"), out)?;
    Ok(())
}

/// Union the top-level groups of every fragment, last writer per key wins
fn merge_fragments(
    fragments: &[PathBuf],
) -> ConfigResult<IndexMap<String, IndexMap<String, Value>>> {
    let mut merged: IndexMap<String, IndexMap<String, Value>> = IndexMap::new();

    for fragment in fragments {
        let content = fs::read_to_string(fragment)?;
        let table: toml::Table =
            toml::from_str(&content).map_err(|e| ConfigError::Malformed {
                path: fragment.clone(),
                message: e.to_string(),
            })?;

        for (group, value) in table {
            let Value::Table(entries) = value else {
                return Err(ConfigError::Malformed {
                    path: fragment.clone(),
                    message: format!("top-level entry '{}' is not a table", group),
                });
            };
            let slot = merged.entry(group).or_insert_with(IndexMap::new);
            for (key, value) in entries {
                slot.insert(key, value);
            }
        }
    }

    Ok(merged)
}

// Configuration Resolver
// Walks the node chain and folds per-node Jobfiles into one JobConfig

use std::path::{Path, PathBuf};

use crate::config::models::{JobConfig, Jobfile, JOBFILE_NAME};
use crate::error::ConfigResult;
use crate::nodes::node_list;

/// Assemble the job configuration for `workdir` by walking the node chain
/// from `basedir` and merging every Jobfile found along the way.
///
/// Fragment lists grow in base-to-working order, so a fragment declared
/// nearer the root always precedes one declared nearer the working
/// directory. A `target` declared closer to the working directory
/// overrides one declared above it; an empty `target` string is treated
/// as unset. Nodes without a Jobfile contribute nothing.
pub fn resolve_config(basedir: &Path, workdir: &Path) -> ConfigResult<JobConfig> {
    let nodes = node_list(basedir, workdir)?;
    let mut config = JobConfig::new(basedir, workdir);

    for node in &nodes {
        let jobfile_path = node.join(JOBFILE_NAME);
        if !jobfile_path.is_file() {
            continue;
        }
        let jobfile = Jobfile::from_file(&jobfile_path)?;
        fold_node(&mut config, node, &jobfile);
    }

    Ok(config)
}

/// Merge one node's Jobfile into the configuration being assembled
fn fold_node(config: &mut JobConfig, node: &Path, jobfile: &Jobfile) {
    config
        .setup
        .extend(jobfile.job.setup.iter().map(|f| join_node(node, f)));
    config
        .input
        .extend(jobfile.job.input.iter().map(|f| join_node(node, f)));
    config
        .submit
        .extend(jobfile.job.submit.iter().map(|f| join_node(node, f)));
    config
        .clean
        .extend(jobfile.job.clean.iter().map(|f| join_node(node, f)));

    if let Some(target) = &jobfile.job.target {
        if !target.is_empty() {
            config.target = Some(join_node(node, target));
        }
    }

    config
        .schedular_options
        .extend(jobfile.schedular.options.iter().cloned());
}

/// Resolve a Jobfile entry against its node directory. Absolute entries
/// are taken as-is.
fn join_node(node: &Path, entry: &str) -> PathBuf {
    let path = Path::new(entry);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        node.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ConfigError;
    use std::fs;

    fn write_jobfile(dir: &Path, content: &str) {
        fs::write(dir.join(JOBFILE_NAME), content).unwrap();
    }

    #[test]
    fn test_resolve_collects_fragments_in_node_order() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();
        let work = base.join("a").join("b");
        fs::create_dir_all(&work).unwrap();

        write_jobfile(base, "[job]\nsetup = [\"top.sh\"]\n");
        write_jobfile(&base.join("a"), "[job]\nsetup = [\"mid.sh\"]\nsubmit = [\"run.sh\"]\n");
        write_jobfile(&work, "[job]\nsetup = [\"leaf.sh\"]\n");

        let config = resolve_config(base, &work).unwrap();

        assert_eq!(
            config.setup,
            vec![
                base.join("top.sh"),
                base.join("a").join("mid.sh"),
                work.join("leaf.sh"),
            ]
        );
        assert_eq!(config.submit, vec![base.join("a").join("run.sh")]);
        assert!(config.input.is_empty());
    }

    #[test]
    fn test_resolve_later_target_overrides_earlier() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();
        let work = base.join("sim");
        fs::create_dir_all(&work).unwrap();

        write_jobfile(base, "[job]\ntarget = \"bin/old\"\n");
        write_jobfile(&work, "[job]\ntarget = \"bin/new\"\n");

        let config = resolve_config(base, &work).unwrap();
        assert_eq!(config.target, Some(work.join("bin/new")));
    }

    #[test]
    fn test_resolve_empty_target_is_unset() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();

        write_jobfile(base, "[job]\ntarget = \"\"\n");

        let config = resolve_config(base, base).unwrap();
        assert!(config.target.is_none());
    }

    #[test]
    fn test_resolve_skips_nodes_without_jobfile() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();
        let work = base.join("a").join("b");
        fs::create_dir_all(&work).unwrap();

        write_jobfile(&work, "[schedular]\noptions = [\"#SBATCH -N 1\"]\n");

        let config = resolve_config(base, &work).unwrap();
        assert_eq!(config.schedular_options, vec!["#SBATCH -N 1"]);
        assert!(config.setup.is_empty());
    }

    #[test]
    fn test_resolve_scheduler_options_accumulate() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();
        let work = base.join("run");
        fs::create_dir_all(&work).unwrap();

        write_jobfile(base, "[schedular]\noptions = [\"#SBATCH -N 4\"]\n");
        write_jobfile(&work, "[schedular]\noptions = [\"#SBATCH -t 10\"]\n");

        let config = resolve_config(base, &work).unwrap();
        assert_eq!(
            config.schedular_options,
            vec!["#SBATCH -N 4", "#SBATCH -t 10"]
        );
    }

    #[test]
    fn test_resolve_malformed_jobfile_names_file() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();

        write_jobfile(base, "[job\nsetup = broken");

        let err = resolve_config(base, base).unwrap_err();
        match err {
            ConfigError::Malformed { path, .. } => {
                assert_eq!(path, base.join(JOBFILE_NAME));
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_then_generate_full_tree() {
        use crate::artifacts::{
            create_input_file, create_setup_file, create_submit_file, create_target_file,
        };

        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();
        let work = base.join("study").join("run01");
        fs::create_dir_all(&work).unwrap();

        fs::write(base.join("env.sh"), "module load mpi\n").unwrap();
        fs::write(work.join("params.toml"), "[sim]\nsteps = 10\n").unwrap();
        fs::write(work.join("launch.sh"), "srun ./job.target job.input\n").unwrap();
        fs::write(work.join("app"), "binary").unwrap();

        write_jobfile(base, "[job]\nsetup = [\"env.sh\"]\n");
        write_jobfile(
            &work,
            "[job]\ninput = [\"params.toml\"]\nsubmit = [\"launch.sh\"]\ntarget = \"app\"\n\n[schedular]\noptions = [\"#SBATCH -N 1\"]\n",
        );

        let config = resolve_config(base, &work).unwrap();
        create_setup_file(&config).unwrap();
        create_input_file(&config).unwrap();
        create_target_file(&config).unwrap();
        create_submit_file(&config).unwrap();

        assert!(work.join("job.setup").exists());
        assert_eq!(
            fs::read_to_string(work.join("job.input")).unwrap(),
            "sim.steps = 10\n"
        );
        assert_eq!(
            fs::read_link(work.join("job.target")).unwrap(),
            work.join("app")
        );
        let submit = fs::read_to_string(work.join("job.submit")).unwrap();
        assert!(submit.contains("#SBATCH -N 1\n"));
        assert!(submit.contains("srun ./job.target job.input\n"));
    }

    #[test]
    fn test_resolve_absolute_entry_kept_as_is() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();

        write_jobfile(base, "[job]\nclean = [\"/scratch/out.log\"]\n");

        let config = resolve_config(base, base).unwrap();
        assert_eq!(config.clean, vec![PathBuf::from("/scratch/out.log")]);
    }
}

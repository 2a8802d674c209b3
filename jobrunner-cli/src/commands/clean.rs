use crate::output;

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

use jobrunner_service::{remove_node_files, resolve_config};

/// Remove generated and transient files from a node directory
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Node directory to clean
    pub nodedir: PathBuf,

    /// Working directory of the job (default: the node directory)
    #[arg(long, short = 'w', value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Base of the directory tree (default: current directory)
    #[arg(long, short = 'b', value_name = "DIR")]
    pub basedir: Option<PathBuf>,
}

pub fn execute(args: CleanArgs) -> Result<()> {
    let nodedir = args.nodedir.canonicalize()?;
    let basedir = match &args.basedir {
        Some(dir) => dir.canonicalize()?,
        None => std::env::current_dir()?,
    };
    let workdir = match &args.workdir {
        Some(dir) => dir.canonicalize()?,
        None => nodedir.clone(),
    };

    let config = resolve_config(&basedir, &workdir)?;
    remove_node_files(&config, &nodedir)?;

    output::success(&format!("cleaned {}", nodedir.display()));
    Ok(())
}

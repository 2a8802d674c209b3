use crate::output;

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

use jobrunner_service::{
    create_input_file, create_setup_file, create_submit_file, create_target_file, resolve_config,
};

/// Generate submission artifacts for a working directory
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Working directory to generate artifacts into
    pub workdir: PathBuf,

    /// Base of the directory tree (default: current directory)
    #[arg(long, short = 'b', value_name = "DIR")]
    pub basedir: Option<PathBuf>,
}

pub fn execute(args: SetupArgs) -> Result<()> {
    let basedir = match &args.basedir {
        Some(dir) => dir.canonicalize()?,
        None => std::env::current_dir()?,
    };
    let workdir = args.workdir.canonicalize()?;

    output::status("Resolving", &format!("{}", workdir.display()));
    let config = resolve_config(&basedir, &workdir)?;

    create_setup_file(&config)?;
    output::check(&format!("job.setup ({} fragments)", config.setup.len()));

    if config.input.is_empty() {
        output::warning("job.input skipped (no input fragments)");
    } else {
        create_input_file(&config)?;
        output::check(&format!("job.input ({} fragments)", config.input.len()));
    }

    if let Some(target) = &config.target {
        create_target_file(&config)?;
        output::check(&format!("job.target -> {}", target.display()));
    }

    create_submit_file(&config)?;
    output::check(&format!("job.submit ({} fragments)", config.submit.len()));

    output::success(&format!("artifacts written to {}", workdir.display()));
    Ok(())
}

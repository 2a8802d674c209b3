use crate::output;

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

use jobrunner_service::resolve_config;

/// Print the resolved job configuration for a working directory
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Working directory to resolve
    pub workdir: PathBuf,

    /// Base of the directory tree (default: current directory)
    #[arg(long, short = 'b', value_name = "DIR")]
    pub basedir: Option<PathBuf>,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let basedir = match &args.basedir {
        Some(dir) => dir.canonicalize()?,
        None => std::env::current_dir()?,
    };
    let workdir = args.workdir.canonicalize()?;

    let config = resolve_config(&basedir, &workdir)?;

    output::status("Basedir", &format!("{}", config.basedir.display()));
    output::status("Workdir", &format!("{}", config.workdir.display()));

    print_list("setup", &config.setup);
    print_list("input", &config.input);
    print_list("submit", &config.submit);
    print_list("clean", &config.clean);

    match &config.target {
        Some(target) => output::status("Target", &format!("{}", target.display())),
        None => output::dim("target: (unset)"),
    }

    if config.schedular_options.is_empty() {
        output::dim("schedular.options: (none)");
    } else {
        output::status("Schedular", &format!("{} options", config.schedular_options.len()));
        for option in &config.schedular_options {
            println!("  {}", option);
        }
    }

    Ok(())
}

fn print_list(name: &str, paths: &[PathBuf]) {
    if paths.is_empty() {
        output::dim(&format!("{}: (none)", name));
        return;
    }
    output::status(&capitalize(name), &format!("{} fragments", paths.len()));
    for path in paths {
        println!("  {}", path.display());
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

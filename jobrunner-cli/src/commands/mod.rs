// CLI subcommands

pub mod clean;
pub mod setup;
pub mod show;

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// verstamp - Build-time version stamping and dependency gate.
#[derive(Debug, Parser)]
#[command(name = "verstamp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default verstamp.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Override the dev build counter ("None" for no dev build)
    #[arg(long, global = true, env = "VERSTAMP_DEV_BUILD")]
    pub dev_build: Option<String>,

    /// Mark the build as a release cut
    #[arg(long, global = true, env = "VERSTAMP_RELEASED")]
    pub released: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stamp version files, then check dependencies (default)
    Build(BuildArgs),

    /// Resolve the version and write the version and recipe files
    Stamp(StampArgs),

    /// Print the resolved version without writing anything
    Resolve(ResolveArgs),

    /// Show the contents of the generated version file
    Show(ShowArgs),

    /// Check runtime dependencies
    Check(CheckArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Leave the recipe file untouched
    #[arg(long)]
    pub no_recipe: bool,

    /// Exit non-zero when a dependency is unmet
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `stamp` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StampArgs {
    /// Leave the recipe file untouched
    #[arg(long)]
    pub no_recipe: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Exit non-zero when a dependency is unmet
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_none() {
        let cli = Cli::parse_from(["verstamp"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_global_overrides() {
        let cli = Cli::parse_from(["verstamp", "stamp", "--dev-build", "7", "--released"]);
        assert_eq!(cli.dev_build.as_deref(), Some("7"));
        assert!(cli.released);
        assert!(matches!(cli.command, Some(Commands::Stamp(_))));
    }

    #[test]
    fn parses_check_strict() {
        let cli = Cli::parse_from(["verstamp", "check", "--strict"]);
        match cli.command {
            Some(Commands::Check(args)) => assert!(args.strict),
            other => panic!("Expected Check command, got {:?}", other),
        }
    }

    #[test]
    fn parses_build_flags() {
        let cli = Cli::parse_from(["verstamp", "build", "--no-recipe", "--strict"]);
        match cli.command {
            Some(Commands::Build(args)) => {
                assert!(args.no_recipe);
                assert!(args.strict);
            }
            other => panic!("Expected Build command, got {:?}", other),
        }
    }

    #[test]
    fn parses_json_flags() {
        let cli = Cli::parse_from(["verstamp", "resolve", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Resolve(ResolveArgs { json: true }))));
        let cli = Cli::parse_from(["verstamp", "show", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Show(ShowArgs { json: true }))));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

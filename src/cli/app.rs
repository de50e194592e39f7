//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::session::Session;
use super::{creds, log, state};

#[derive(Parser)]
#[command(name = "git-build-state")]
#[command(author, version, about = "Show Bitbucket build status for git commits")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Template for text output (Tera syntax)
    #[arg(long, short = 't', global = true)]
    pub template: Option<String>,

    /// Protocol used when the endpoint is derived from the git remote
    #[arg(long, global = true, default_value = "https")]
    pub proto: String,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true, visible_alias = "debug")]
    pub verbose: bool,

    /// Git reference to show (defaults to HEAD)
    pub reference: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the build status of a commit (default)
    State {
        /// Git reference (defaults to HEAD)
        reference: Option<String>,
    },

    /// Show the branch log with build statistics
    Log {
        /// Branch (defaults to the current branch)
        branch: Option<String>,
    },

    /// Print a git config command storing encoded credentials
    GenerateCreds,

    /// Save encoded credentials in global git config
    Setup,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);
    let template = cli.template.as_deref();

    output.verbose("git-build-state starting");

    let command = cli.command.unwrap_or(Commands::State {
        reference: cli.reference,
    });

    match command {
        Commands::State { reference } => {
            let session = Session::open(&output, &cli.proto)?;
            state::run(&output, &session, template, reference.as_deref())?
        }
        Commands::Log { branch } => {
            let session = Session::open(&output, &cli.proto)?;
            log::run(&output, &session, template, branch.as_deref())?
        }
        Commands::GenerateCreds => creds::generate(&output)?,
        Commands::Setup => creds::setup(&output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_reference_means_state() {
        let cli = Cli::try_parse_from(["git-build-state", "HEAD~2"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.reference.as_deref(), Some("HEAD~2"));
    }

    #[test]
    fn log_subcommand_with_flags() {
        let cli = Cli::try_parse_from([
            "git-build-state",
            "log",
            "main",
            "--format",
            "json",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Log { branch }) => assert_eq!(branch.as_deref(), Some("main")),
            _ => panic!("expected log command"),
        }
    }

    #[test]
    fn template_and_proto_flags() {
        let cli = Cli::try_parse_from([
            "git-build-state",
            "state",
            "--template",
            "{{ state }}",
            "--proto",
            "http",
        ])
        .unwrap();

        assert_eq!(cli.template.as_deref(), Some("{{ state }}"));
        assert_eq!(cli.proto, "http");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

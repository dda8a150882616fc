//! Command line interface.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "vocab-trainer", about = "Vocabulary trainer interval engine", version)]
pub struct Cli {
    /// Remove unreferenced intervals from every registry before reporting
    #[arg(long, global = true)]
    pub prune: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create users seeded with the configured default intervals
    Register {
        /// User names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Report due words and expressions per user (default)
    Status,
}

impl Cli {
    /// Subcommand to run; `status` when none is given.
    pub fn action(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("vocab-trainer").chain(args.iter().copied()))
    }

    #[test]
    fn test_register_names() {
        let cli = parse(&["register", "alice", "bob"]).unwrap();
        assert_eq!(
            cli.action(),
            &Command::Register {
                names: vec!["alice".to_string(), "bob".to_string()]
            }
        );
        assert!(!cli.prune);
    }

    #[test]
    fn test_defaults_to_status() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.action(), &Command::Status);

        let cli = parse(&["--prune", "status"]).unwrap();
        assert!(cli.prune);
        assert_eq!(cli.action(), &Command::Status);

        let cli = parse(&["register", "alice", "--prune"]).unwrap();
        assert!(cli.prune);
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(parse(&["regster", "bob"]).is_err());
    }

    #[test]
    fn test_register_requires_a_name() {
        let err = parse(&["register"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

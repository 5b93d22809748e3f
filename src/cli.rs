use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "blogrank",
    about = "Rank blog posts against a free-text query"
)]
pub struct Cli {
    /// Override the XDG data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Read posts from this JSON file instead of <data-dir>/posts.json
    #[arg(long, global = true)]
    pub posts: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank posts against a query
    Search(SearchArgs),
    /// Show the data directory and corpus size
    Status(StatusArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search query
    pub query: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show which fields each query word matched
    #[arg(long)]
    pub details: bool,

    /// Score as if the current time were this RFC 3339 timestamp
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

// -- Status --

#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "blogrank",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_search_defaults() {
        let cli = Cli::parse_from(["blogrank", "search", "rust ownership"]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, "rust ownership");
                assert!(!args.json);
                assert!(!args.details);
                assert!(args.now.is_none());
            }
            _ => panic!("expected search command"),
        }
        assert!(cli.posts.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_pinned_clock_and_global_flags() {
        let cli = Cli::parse_from([
            "blogrank",
            "search",
            "tokio",
            "--json",
            "--now",
            "2024-06-01T12:00:00Z",
            "--posts",
            "/tmp/posts.json",
            "-vv",
        ]);
        match cli.command {
            Command::Search(args) => {
                assert!(args.json);
                assert_eq!(
                    args.now.unwrap().to_rfc3339(),
                    "2024-06-01T12:00:00+00:00"
                );
            }
            _ => panic!("expected search command"),
        }
        assert_eq!(cli.posts, Some(PathBuf::from("/tmp/posts.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_bad_timestamp() {
        let result =
            Cli::try_parse_from(["blogrank", "search", "x", "--now", "yesterday"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}

//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::application::OutputOptions;
use crate::domain::FetchRequest;

/// Blog and article operations
///
/// Fetch and manage blog posts or external articles (feature under active development).
#[derive(Parser, Debug)]
#[command(name = "arc-blog")]
#[command(author, version)]
#[command(propagate_version = true)]
#[command(after_help = "\
Examples:
  # Fetch and save a single article (Phase 2 placeholder)
  arc-blog fetch --url https://example.com/post

  # Pull a feed into docs/research-external/blog/
  arc-blog fetch --playlist feed.xml --out-dir docs/research-external/blog

  # Pipe the fetched article into an analyzer workflow
  arc-blog fetch --url https://example.com/post --analyze --output json")]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/arc-blog/arc-blog.toml)
    #[arg(long, global = true, env = "ARC_BLOG_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a blog/article (stub)
    #[command(after_help = "\
Examples:
  # Basic fetch placeholder
  arc-blog fetch --url https://example.com/post

  # Write the article into a specific directory
  arc-blog fetch --url https://example.com/post --out-dir docs/research-external/blog

  # Request analysis output (future hook) and emit JSON
  arc-blog fetch --url https://example.com/post --analyze --output json")]
    Fetch(FetchArgs),

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FetchArgs {
    /// Article URL to fetch
    #[arg(long, value_hint = ValueHint::Url)]
    pub url: Option<String>,

    /// Playlist/feed file to ingest (Phase 2 placeholder)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub playlist: Option<String>,

    /// Destination directory for fetched content [default: docs/research-external/blog]
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub out_dir: Option<String>,

    /// Send fetched content into analyzer workflows (placeholder)
    #[arg(long)]
    pub analyze: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl FetchArgs {
    /// Build the domain request, taking `out_dir` from settings when not given.
    pub fn to_request(&self, default_out_dir: &str) -> FetchRequest {
        FetchRequest::new(
            self.url.clone(),
            self.playlist.clone(),
            self.out_dir.as_deref().unwrap_or(default_out_dir),
            self.analyze,
        )
    }
}

/// Output selection flags shared by commands that print results.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: table, json, yaml, quiet [default: table]
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<String>,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output yaml
    #[arg(long)]
    pub yaml: bool,

    /// Shorthand for --output quiet
    #[arg(short, long)]
    pub quiet: bool,
}

impl From<&OutputArgs> for OutputOptions {
    fn from(args: &OutputArgs) -> Self {
        Self {
            output: args.output.clone(),
            json: args.json,
            yaml: args.yaml,
            quiet: args.quiet,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}

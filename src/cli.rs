use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gh-activity")]
#[command(version, about = "Fetch and display recent GitHub user activity")]
#[command(after_help = "Examples:\n  gh-activity kamranahmedse\n  gh-activity kamranahmedse --stats\n  gh-activity kamranahmedse --limit 5\n  gh-activity kamranahmedse --all")]
pub struct Cli {
    /// GitHub username to fetch activities for
    pub username: Option<String>,

    /// Show activity statistics
    #[arg(short = 's', long = "stats")]
    pub stats: bool,

    /// Show all fetched activities
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Show N activities (default: display.default_limit, 10)
    #[arg(short = 'l', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Hide commit, issue and pull request detail lines
    #[arg(long = "no-details")]
    pub no_details: bool,

    /// Colorize output using the configured colors
    #[arg(long = "color")]
    pub color: bool,

    /// Path to config file (default: ~/.config/gh-activity/config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Initialize configuration file
    #[arg(long = "init")]
    pub init: bool,

    /// Check configuration validity
    #[arg(long = "check")]
    pub check: bool,

    /// Print current configuration
    #[arg(long = "print-config")]
    pub print: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Number of records to display: `--all` wins over `--limit`, which wins
    /// over the configured default
    pub fn resolve_limit(&self, default_limit: usize, total: usize) -> usize {
        if self.all {
            total
        } else {
            self.limit.unwrap_or(default_limit)
        }
    }
}

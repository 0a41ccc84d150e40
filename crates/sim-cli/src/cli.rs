use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "simcheck", version, about = "Find near-duplicate content across plain-text documents")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare every pair of documents in a folder and save a report there
    Scan(ScanArgs),
    /// Compare exactly two files
    Pair(PairArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Engine settings shared by both subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Snippets listed per pair
    #[arg(long)]
    pub max_fragments: Option<usize>,

    /// Leave very frequent characters of long texts out of the match index
    #[arg(long)]
    pub autojunk: bool,

    /// Compare pairs on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for parallel comparison
    #[arg(long)]
    pub threads: Option<usize>,
}

impl EngineArgs {
    /// Command-line values win over the configuration file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(n) = self.max_fragments {
            config.compare.max_fragments = n;
        }
        if self.autojunk {
            config.compare.autojunk = true;
        }
        if self.sequential {
            config.compare.parallel = false;
        }
        if let Some(n) = self.threads {
            config.compare.worker_threads = n;
        }
    }
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Folder holding the documents
    pub folder: PathBuf,

    /// File extension to pick up, without the dot
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Where to save the report (default: <FOLDER>/detailed_report.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report without saving it
    #[arg(long)]
    pub no_save: bool,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Args, Debug)]
pub struct PairArgs {
    /// First document
    pub left: PathBuf,

    /// Second document
    pub right: PathBuf,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub engine: EngineArgs,
}

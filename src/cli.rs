use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Stats,
    Graph,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stats" => Ok(OutputFormat::Stats),
            "graph" => Ok(OutputFormat::Graph),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'stats' or 'graph'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Stats => "📝 Emitting aggregate statistics...",
            OutputFormat::Graph => "📝 Emitting render-ready graph...",
        }
    }
}

/// Transform a resolved dependency manifest into a force-graph dataset
#[derive(Parser, Debug)]
#[command(name = "depviz")]
#[command(version)]
#[command(
    about = "Transform resolved dependency manifests into force-directed graph datasets and aggregate statistics",
    long_about = None
)]
pub struct Args {
    /// Path to the payload JSON document (the resolved dependency manifest)
    #[arg(short, long, required_unless_present = "origin", conflicts_with = "origin")]
    pub payload: Option<PathBuf>,

    /// Path to the flags JSON document (defaults to an empty mapping)
    #[arg(long, conflicts_with = "origin")]
    pub flags: Option<PathBuf>,

    /// HTTP origin exposing /data and /flags (e.g. http://localhost:1337)
    #[arg(short, long)]
    pub origin: Option<String>,

    /// Output format: stats or graph
    #[arg(short, long, default_value = "stats")]
    pub format: OutputFormat,
}

impl Args {
    /// Parses command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

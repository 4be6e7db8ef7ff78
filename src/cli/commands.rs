//! CLI arguments and parsing

use clap::Parser;
use std::path::PathBuf;

/// Usage text printed when the binary runs without arguments
pub const USAGE: &str = "\
logship --workspace-id <WORKSPACE_ID> --primary-key <KEY> --blob <FILE_OR_URL>... \
[--table-name <TABLE>] [--use-types]

  --workspace-id  Mandatory - The unique identifier for the Log Analytics workspace.
  --primary-key   Mandatory - Primary key for authentication. Can be retrieved from the
                  Log Analytics workspace under Agents management.
  --blob          Mandatory - CSV file or URL to a blob containing events.
                  May be repeated or given as a space separated list: url1 url2 .. urln
  --table-name    The target table name to publish the data to in Log Analytics.
                  Defaults to each file's name.
  --use-types     Optional - number, timestamp and boolean columns keep their type
                  when inserted into the Log Analytics workspace.
  --config        YAML or JSON file with workspace_id and shared_key.";

/// Ship CSV files to Azure Log Analytics
#[derive(Parser, Debug)]
#[command(name = "logship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log Analytics workspace id
    #[arg(
        short,
        long,
        visible_alias = "workspace_id",
        env = "LOGSHIP_WORKSPACE_ID"
    )]
    pub workspace_id: Option<String>,

    /// Workspace primary (or secondary) key, base64
    #[arg(
        short = 'p',
        long,
        visible_alias = "primary_key",
        env = "LOGSHIP_SHARED_KEY",
        hide_env_values = true
    )]
    pub primary_key: Option<String>,

    /// CSV files or URLs to upload, in order
    #[arg(short, long, num_args = 1.., required = true)]
    pub blob: Vec<String>,

    /// Target table (Log-Type); defaults to each file's name
    #[arg(short, long, visible_alias = "table_name")]
    pub table_name: Option<String>,

    /// Append type suffixes (_d, _t, _b, _s) to column names
    #[arg(long, visible_alias = "use_types")]
    pub use_types: bool,

    /// Credentials file (YAML or JSON)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Ingestion host override, e.g. for sovereign clouds
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Rows per uploaded batch
    #[arg(long, default_value = "1000")]
    pub batch_size: usize,

    /// Print batches instead of uploading them
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

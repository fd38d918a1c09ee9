//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::media::DEFAULT_MAX_MOUNTS;
use crate::domain::{BackupKinds, CheckResult, JobStatus, SizeUnit, Thresholds};
use crate::error::ThresholdError;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// Check status of Bareos backups
///
/// Queries the Bareos catalog database and reports job and tape state as a
/// monitoring plugin (exit codes 0=OK, 1=WARNING, 2=CRITICAL, 3=UNKNOWN).
#[derive(Parser, Debug)]
#[command(name = "check_bareos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (logged to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long, global = true, env = "CHECK_BAREOS_CONFIG")]
    pub config: Option<String>,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Catalog connection arguments
#[derive(Args, Debug, Default)]
pub struct DatabaseArgs {
    /// User name for the database connection
    #[arg(short = 'U', long, env = "CHECK_BAREOS_DATABASE_USER")]
    pub user: Option<String>,

    /// Password for the database connection
    #[arg(short, long, env = "CHECK_BAREOS_DATABASE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database host [default: 127.0.0.1]
    #[arg(short = 'H', long, env = "CHECK_BAREOS_DATABASE_HOST")]
    pub host: Option<String>,

    /// Database port [default: 5432]
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Database name [default: bareos]
    #[arg(short, long)]
    pub database: Option<String>,

    /// Seconds to wait for the database [default: 10]
    #[arg(long)]
    pub connect_timeout: Option<u64>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Specific checks on jobs
    Job(JobArgs),

    /// Specific checks on tapes
    Tape(TapeArgs),

    /// Backup status checks
    Status(StatusArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Warning and critical threshold ranges
#[derive(Args, Debug, Clone)]
pub struct ThresholdArgs {
    /// Warning range (e.g. 5, 10:, ~:20, @10:20)
    #[arg(short, long, default_value = "5", allow_hyphen_values = true)]
    pub warning: String,

    /// Critical range (e.g. 10, 5:, ~:30, @10:20)
    #[arg(short, long, default_value = "10", allow_hyphen_values = true)]
    pub critical: String,
}

impl ThresholdArgs {
    /// Parse both ranges
    pub fn thresholds(&self) -> Result<Thresholds, ThresholdError> {
        Thresholds::parse(Some(&self.warning), Some(&self.critical))
    }
}

/// Backup level selection; none selected means all levels
#[derive(Args, Debug, Clone, Default)]
pub struct KindArgs {
    /// Backup kind full
    #[arg(short, long)]
    pub full: bool,

    /// Backup kind incremental
    #[arg(short, long)]
    pub inc: bool,

    /// Backup kind differential
    #[arg(short = 'D', long)]
    pub diff: bool,
}

impl KindArgs {
    /// Selected backup levels
    pub fn kinds(&self) -> BackupKinds {
        BackupKinds::from_flags(self.full, self.inc, self.diff)
    }
}

/// Arguments for job checks
#[derive(Parser, Debug)]
pub struct JobArgs {
    #[command(subcommand)]
    pub command: JobCommands,
}

/// Job filter shared by the state checks
#[derive(Args, Debug, Clone)]
pub struct JobFilterArgs {
    /// Time in days
    #[arg(short, long, default_value_t = 7)]
    pub time: u32,

    /// Job state: T=Completed, C=Queued, R=Running, E=Terminated with errors,
    /// f=Fatal error, A=Canceled by user
    #[arg(short, long, value_enum, default_value = "C")]
    pub state: JobStatus,

    #[command(flatten)]
    pub kinds: KindArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

/// Job subcommands
#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// Check how many jobs are in a specific state
    Jobs(JobFilterArgs),

    /// Check the state of a specific job
    Single {
        /// Name of the job (substring match)
        #[arg(short, long)]
        name: Option<String>,

        #[command(flatten)]
        filter: JobFilterArgs,
    },

    /// Check if jobs in a state started more than n days ago
    Runtime {
        /// Time in days
        #[arg(short, long, default_value_t = 7)]
        time: u32,

        /// Job state to look at
        #[arg(short, long, value_enum, default_value = "C")]
        state: JobStatus,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },
}

/// Arguments for tape checks
#[derive(Parser, Debug)]
pub struct TapeArgs {
    #[command(subcommand)]
    pub command: TapeCommands,
}

/// Tape subcommands
#[derive(Subcommand, Debug)]
pub enum TapeCommands {
    /// Count empty tapes in the storage (purged, recycled or expired)
    Empty(ThresholdArgs),

    /// Count how many tapes are in the storage
    InStorage(ThresholdArgs),

    /// Count how many tapes are expired
    Expired(ThresholdArgs),

    /// Count how many tapes will expire in n days
    WillExpire {
        /// Time in days
        #[arg(short, long, default_value_t = 7)]
        time: u32,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Count how many tapes should be replaced
    Replace {
        /// Number of mounts after which a tape should be replaced
        #[arg(short, long, default_value_t = DEFAULT_MAX_MOUNTS)]
        mounts: u32,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },
}

/// Arguments for backup status checks
#[derive(Parser, Debug)]
pub struct StatusArgs {
    #[command(subcommand)]
    pub command: StatusCommands,
}

/// Status subcommands
#[derive(Subcommand, Debug)]
pub enum StatusCommands {
    /// Size of all backups in the catalog (restrict with time and kind)
    TotalSize {
        /// Only count backups from the last n days
        #[arg(short, long)]
        time: Option<u32>,

        /// Display unit
        #[arg(short, long, value_enum, default_value_t = SizeUnit::Tb)]
        unit: SizeUnit,

        #[command(flatten)]
        kinds: KindArgs,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Check if successful backups have 0 bytes
    Empty {
        /// Time in days
        #[arg(short, long, default_value_t = 7)]
        time: u32,

        #[command(flatten)]
        kinds: KindArgs,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Check if backups are larger than a given size
    Oversized {
        /// Time in days
        #[arg(short, long, default_value_t = 7)]
        time: u32,

        /// Border value for oversized backups
        #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
        size: f64,

        /// Display unit
        #[arg(short, long, value_enum, default_value_t = SizeUnit::Tb)]
        unit: SizeUnit,

        #[command(flatten)]
        kinds: KindArgs,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Check if backups failed in the last n days
    Failed {
        /// Time in days
        #[arg(short, long, default_value_t = 7)]
        time: u32,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plugin status line with performance data
    #[default]
    Nagios,
    /// JSON format for machine parsing
    Json,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

/// Map a clap error to the plugin result it should produce
///
/// Returns `None` for help and version output, which clap prints itself.
/// Every other argument error becomes UNKNOWN with clap's first message line.
pub fn usage_result(err: &clap::Error) -> Option<CheckResult> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => {
            let rendered = err.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .trim();
            Some(CheckResult::unknown(message))
        }
    }
}

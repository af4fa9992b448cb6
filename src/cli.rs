use crate::report::OutputFormat;
use crate::types::config::FailOn;
use crate::types::variant::Variant;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "breach-severity",
    version,
    about = "Data breach severity calculator (SE = DPC x EI + CB)"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (reports still print)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of the discovered ones
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the severity score for one assessment
    Compute(ComputeCommand),
    /// List the options of one or all criteria
    Options(OptionsCommand),
    /// Print the Know More panel of a criterion
    Examples(ExamplesCommand),
    /// Fill in the form interactively, one command per line
    Session(SessionCommand),
    /// Write a default breach-severity.toml
    Init,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VariantArg {
    Explicit,
    Reactive,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
    Html,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FailOnArg {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Args)]
pub struct ComputeCommand {
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
    /// Data processing context: 1, 2, 3 or 4
    #[arg(long)]
    pub dpc: Option<String>,
    /// Ease of identification: 0.25, 0.5, 0.75 or 1
    #[arg(long)]
    pub ei: Option<String>,
    /// Loss of confidentiality: 0, 0.25 or 0.5
    #[arg(long)]
    pub confidentiality: Option<String>,
    /// Loss of integrity: 0, 0.25 or 0.5
    #[arg(long)]
    pub integrity: Option<String>,
    /// Loss of availability: 0, 0.25 or 0.5
    #[arg(long)]
    pub availability: Option<String>,
    /// Malicious intent: 0 or 0.5
    #[arg(long)]
    pub malicious: Option<String>,
    /// Justification as <criterion>=<text>, repeatable (reactive variant)
    #[arg(long = "comment", value_name = "CRITERION=TEXT")]
    pub comments: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 1 when the risk level is at least this band
    #[arg(long, value_enum)]
    pub fail_on: Option<FailOnArg>,
    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args)]
pub struct OptionsCommand {
    /// dpc, ei, confidentiality, integrity, availability or malicious
    pub criterion: Option<String>,
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}

#[derive(Args)]
pub struct ExamplesCommand {
    pub criterion: String,
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}

#[derive(Args)]
pub struct SessionCommand {
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Explicit => Variant::Explicit,
            VariantArg::Reactive => Variant::Reactive,
        }
    }
}

impl From<ReportFormat> for OutputFormat {
    fn from(arg: ReportFormat) -> Self {
        match arg {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Html => OutputFormat::Html,
        }
    }
}

impl From<FailOnArg> for FailOn {
    fn from(arg: FailOnArg) -> Self {
        match arg {
            FailOnArg::None => FailOn::None,
            FailOnArg::Low => FailOn::Low,
            FailOnArg::Medium => FailOn::Medium,
            FailOnArg::High => FailOn::High,
            FailOnArg::VeryHigh => FailOn::VeryHigh,
        }
    }
}

mod calculator;
mod cli;
mod config;
mod content;
mod error;
mod report;
mod session;
mod types;

use crate::calculator::Calculator;
use crate::error::{Result, SeverityError};
use crate::report::OutputFormat;
use crate::types::config::{FailOn, SeverityConfig};
use crate::types::criteria::Criterion;
use crate::types::variant::Variant;
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RISK_THRESHOLD: i32 = 1;
    pub const INPUT_REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("breach_severity={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let explicit_config = cli.config.as_deref();

    match cli.command {
        cli::Commands::Compute(cmd) => compute(cmd, &load_config(explicit_config, &cwd)?),
        cli::Commands::Options(cmd) => {
            let cfg = load_config(explicit_config, &cwd)?;
            let variant = resolve_variant(cmd.variant, &cfg);
            let criteria = match cmd.criterion.as_deref() {
                Some(name) => vec![name.parse::<Criterion>()?],
                None => Criterion::ALL.to_vec(),
            };
            print_options(variant, &criteria);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Examples(cmd) => {
            let cfg = load_config(explicit_config, &cwd)?;
            let variant = resolve_variant(cmd.variant, &cfg);
            let criterion = cmd.criterion.parse::<Criterion>()?;
            let examples = content::ContentTable::for_variant(variant)
                .examples(criterion)
                .ok_or_else(|| SeverityError::NoExamples(criterion.title().to_string()))?;
            println!("{examples}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Session(cmd) => {
            let cfg = load_config(explicit_config, &cwd)?;
            apply_color(cmd.no_color, &cfg);
            let mut calculator = Calculator::new(resolve_variant(cmd.variant, &cfg));
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout().lock();
            session::run(&mut calculator, stdin.lock(), &mut stdout)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init => {
            let path = cwd.join(config::DEFAULT_CONFIG_FILE);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<SeverityConfig> {
    let cfg = config::load_config(explicit, cwd)?;
    info!(variant = %cfg.calculator.variant, "configuration loaded");
    Ok(cfg)
}

fn compute(cmd: cli::ComputeCommand, cfg: &SeverityConfig) -> Result<i32> {
    apply_color(cmd.no_color, cfg);
    let mut calculator = Calculator::new(resolve_variant(cmd.variant, cfg));

    let selections = [
        (Criterion::Dpc, &cmd.dpc),
        (Criterion::Ei, &cmd.ei),
        (Criterion::Confidentiality, &cmd.confidentiality),
        (Criterion::Integrity, &cmd.integrity),
        (Criterion::Availability, &cmd.availability),
        (Criterion::Malicious, &cmd.malicious),
    ];
    for (criterion, value) in selections {
        if let Some(value) = value {
            calculator.set(criterion, value)?;
        }
    }
    for arg in &cmd.comments {
        let (criterion, text) = arg
            .split_once('=')
            .ok_or_else(|| SeverityError::InvalidCommentArg(arg.clone()))?;
        calculator.set_comment(criterion.parse()?, text)?;
    }

    let risk_level = calculator.compute()?.risk_level;

    let format = match cmd.format {
        Some(format) => OutputFormat::from(format),
        None => cfg.output.format.parse()?,
    };
    println!("{}", report::render(&calculator, format)?);

    let fail_on = cmd.fail_on.map(FailOn::from).unwrap_or(cfg.policy.fail_on);
    if fail_on.is_met_by(risk_level) {
        eprintln!("risk level {risk_level} meets fail-on threshold");
        Ok(exit_code::RISK_THRESHOLD)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn resolve_variant(arg: Option<cli::VariantArg>, cfg: &SeverityConfig) -> Variant {
    arg.map(Variant::from).unwrap_or(cfg.calculator.variant)
}

fn apply_color(no_color: bool, cfg: &SeverityConfig) {
    if no_color || !cfg.output.color {
        colored::control::set_override(false);
    }
}

fn print_options(variant: Variant, criteria: &[Criterion]) {
    let table = content::ContentTable::for_variant(variant);
    for criterion in criteria {
        let content = table.criterion(*criterion);
        println!("{} [{}]", criterion.title(), criterion.key());
        println!("  {}", content.summary);
        for option in content.options {
            println!("  {:<5} {}", option.value, option.label);
            if option.label != option.description {
                println!("        {}", option.description);
            }
        }
        println!();
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INPUT_REJECTED
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}

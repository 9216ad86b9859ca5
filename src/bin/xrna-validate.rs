use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};
use xrna_validate::{ClassReporting, ValidatorOpts, XrnaValidator};

/// Validate an XRNA document against the modular schema and the RNA structure rules.
#[derive(Parser, Debug)]
#[command(name = "xrna-validate", version)]
struct Cli {
    /// Input document JSON.
    file: PathBuf,

    /// Root schema file.
    #[arg(long, default_value = "schemas/xrna-schema.json")]
    schema: PathBuf,

    /// Directory where schema sections are kept; `$ref`s resolve only inside it.
    #[arg(long, default_value = "schemas/sections")]
    sections: PathBuf,

    /// Do not enforce the `format` keyword.
    #[arg(long, default_value_t = false)]
    no_formats: bool,

    /// Report every reference to an undeclared class, not just the first per class.
    #[arg(long, default_value_t = false)]
    per_occurrence: bool,

    /// Log pass progress.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log violations.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let document = xrna_validate::read_document(&cli.file)?;

    let opts = ValidatorOpts {
        schema_path: cli.schema.clone(),
        sections_dir: cli.sections.clone(),
        validate_formats: !cli.no_formats,
        class_reporting: if cli.per_occurrence {
            ClassReporting::PerOccurrence
        } else {
            ClassReporting::Distinct
        },
    };
    let validator = XrnaValidator::from_opts(&opts)
        .with_context(|| format!("load schema '{}'", cli.schema.display()))?;

    let report = validator
        .validate(&document)
        .with_context(|| format!("validate '{}'", cli.file.display()))?;

    for v in report.violations() {
        tracing::error!("{v}");
    }

    if !report.is_pass() {
        anyhow::bail!("Validation failed: {}", report.summary());
    }
    println!("Validation succeeded.");
    Ok(())
}

fn init_logging(cli: &Cli) {
    let level_filter = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .init();
}

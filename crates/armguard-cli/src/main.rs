//! CLI entry point for armguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `armguard-app` crate.

use anyhow::Context;
use armguard_app::{
    CheckInput, ExplainOutput, FailureStage, Outcome, SchemaKind, json_schema, outcome_exit_code,
    render_annotations, render_markdown, render_text, run_check, run_explain, serialize_report,
};
use armguard_settings::Overrides;
use armguard_template::{Compiler, read_optional};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "armguard",
    version,
    about = "Compliance gate for Bicep and ARM infrastructure templates"
)]
struct Cli {
    /// Log filter (e.g. `warn`, `debug`, `armguard_template=trace`).
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a template and evaluate naming, security, and cost policy.
    Check {
        /// Bicep template, or an already compiled `.json` ARM template.
        #[arg(default_value = "main.bicep")]
        template: Utf8PathBuf,

        /// Abbreviation policy (JSON object of abbreviation -> full term).
        #[arg(long, default_value = "abbreviations.json")]
        abbreviations: Utf8PathBuf,

        /// Path to armguard config TOML.
        #[arg(long, default_value = "armguard.toml")]
        config: Utf8PathBuf,

        /// Override profile (strict|security-only).
        #[arg(long)]
        profile: Option<String>,

        /// Bicep compiler front end (az|bicep).
        #[arg(long, default_value = "az")]
        compiler: String,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Where to write a Markdown report.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,

        /// Also print GitHub Actions annotations.
        #[arg(long)]
        annotations: bool,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max_annotations: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "security.hardening") or code (e.g., "oversized_sku") to explain.
        identifier: String,
    },

    /// Print a JSON Schema.
    Schema {
        /// Which document to describe (report|config).
        #[arg(default_value = "report")]
        kind: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.cmd {
        Commands::Check {
            template,
            abbreviations,
            config,
            profile,
            compiler,
            report_out,
            markdown_out,
            annotations,
            max_annotations,
        } => cmd_check(CheckArgs {
            template,
            abbreviations,
            config,
            profile,
            compiler,
            report_out,
            markdown_out,
            annotations: annotations.then_some(max_annotations),
        }),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Schema { kind } => cmd_schema(&kind),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

struct CheckArgs {
    template: Utf8PathBuf,
    abbreviations: Utf8PathBuf,
    config: Utf8PathBuf,
    profile: Option<String>,
    compiler: String,
    report_out: Option<Utf8PathBuf>,
    markdown_out: Option<Utf8PathBuf>,
    /// `Some(max)` when annotations are requested.
    annotations: Option<usize>,
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let Some(compiler) = Compiler::parse(&args.compiler) else {
        anyhow::bail!("unknown compiler: {} (expected az or bicep)", args.compiler);
    };

    println!("Compiling {}...", args.template);

    let outcome = run_check(CheckInput {
        template: &args.template,
        compiler: &compiler,
        config_text: read_optional(&args.config),
        abbreviations_text: read_optional(&args.abbreviations),
        overrides: Overrides {
            profile: args.profile.clone(),
        },
    });

    match &outcome {
        Outcome::EnvironmentFailure { stage, reason } => {
            let prefix = match stage {
                FailureStage::Compile => "Compilation failed",
                FailureStage::Config => "Invalid configuration",
            };
            eprintln!("{prefix}: {reason}");
        }
        Outcome::Clean { report } | Outcome::ViolationsFound { report } => {
            print!("{}", render_text(report));

            if let Some(path) = &args.report_out {
                let data = serialize_report(report)?;
                write_file(path, &data).context("write report json")?;
            }
            if let Some(path) = &args.markdown_out {
                write_file(path, render_markdown(report).as_bytes()).context("write markdown")?;
            }
            if let Some(max) = args.annotations {
                for annotation in render_annotations(report, Some(max)) {
                    println!("{annotation}");
                }
            }
        }
    }

    let code = outcome_exit_code(&outcome);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {path}"))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", armguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                armguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_schema(kind: &str) -> anyhow::Result<()> {
    let kind = match kind {
        "report" => SchemaKind::Report,
        "config" => SchemaKind::Config,
        other => anyhow::bail!("unknown schema: {other} (expected report or config)"),
    };
    println!("{}", json_schema(kind)?);
    Ok(())
}

#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use udep::cli::args::CliArgs;
use udep::cli::config::resolve_config;
use udep::cli::driver;
use udep::cli::reporter::Reporter;

const EXIT_FAILURE: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if UDEP_LOG or RUST_LOG is set.
    // Supports UDEP_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    udep::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let config = resolve_config(&args, &cwd)?;
    let summary = driver::run(&config)?;

    let reporter = Reporter::new(std::io::stderr().is_terminal());
    let mut stdout = std::io::stdout().lock();
    for module in &summary.modules {
        match &module.result {
            Ok(compiled) if config.dependencies_only => {
                let line = reporter.format_dependencies(&compiled.module_id, &compiled.dependencies);
                writeln!(stdout, "{line}")?;
            }
            Ok(compiled) => {
                if let Some(rendered) = &compiled.rendered {
                    writeln!(stdout, "{rendered}")?;
                }
            }
            Err(error) => eprintln!("{}", reporter.format_failure(&module.input, error)),
        }
    }
    stdout.flush()?;

    if config.out_dir.is_some() && !config.dependencies_only {
        eprintln!("{}", reporter.format_summary(&summary));
    }
    if summary.failed() > 0 {
        std::process::exit(EXIT_FAILURE);
    }
    Ok(())
}

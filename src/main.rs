//! CLI entry point for grader.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use grader::source::{self, HtmlSource};
use grader::ui::Reporter;
use grader::{evaluate, load_checks, output, Document, GraderError};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.report_mode());

    if let Err(err) = run(&cli, &reporter) {
        report_error(&reporter, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, reporter: &Reporter) -> Result<()> {
    // Missing inputs fail before anything is loaded
    require_exists(&cli.checks)?;
    let html_source = cli.source();
    if let HtmlSource::File(path) = &html_source {
        require_exists(path)?;
    }

    let raw = match &html_source {
        HtmlSource::File(path) => {
            reporter.step(&format!("Reading {}", path.display()));
            source::load_from_file(path)?
        }
        HtmlSource::Url(url) => {
            reporter.step(&format!("Fetching {}", url));
            let pending = source::load_from_url(url)?;
            pending.wait()?
        }
    };

    let checks = load_checks(&cli.checks)?;
    if checks.is_empty() {
        reporter.warn(&format!("{} contains no checks", cli.checks.display()));
    } else {
        reporter.step(&format!(
            "Evaluating {} checks from {}",
            checks.len(),
            cli.checks.display()
        ));
    }

    let document = Document::parse(&raw);
    let result = evaluate(&document, &checks)?;

    output::write(&result).context("Failed to write results to stdout")?;
    reporter.success(&format!(
        "{} of {} checks present in {}",
        result.present_count(),
        result.len(),
        html_source
    ));

    Ok(())
}

fn require_exists(path: &Path) -> Result<(), GraderError> {
    if path.exists() {
        Ok(())
    } else {
        Err(GraderError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

fn report_error(reporter: &Reporter, err: &anyhow::Error) {
    let kind = err.downcast_ref::<GraderError>().map(GraderError::kind);
    reporter.error_with_kind(&err.to_string(), kind);
    for cause in err.chain().skip(1) {
        reporter.detail(&format!("caused by: {}", cause));
    }
}

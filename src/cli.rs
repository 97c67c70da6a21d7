//! CLI argument definitions for grader.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use grader::source::HtmlSource;
use grader::ui::{self, ReportMode};

/// Checks file used when `--checks` is not given.
pub const DEFAULT_CHECKS_FILE: &str = "checks.json";
/// HTML file used when neither `--file` nor `--url` is given.
pub const DEFAULT_HTML_FILE: &str = "index.html";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE")
);

#[derive(Parser, Debug)]
#[command(name = "grader")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Check an HTML document for the presence of CSS selectors", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    grader -c checks.json -f index.html\n    grader -c checks.json -u https://example.com/\n\n    Results are printed to stdout as JSON; diagnostics go to stderr."
)]
pub struct Cli {
    /// Path to checks.json
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CHECKS_FILE)]
    pub checks: PathBuf,

    /// Path to index.html
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_HTML_FILE)]
    pub file: PathBuf,

    /// Url to index.html (takes precedence over --file)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Suppress status lines on stderr (errors still print)
    #[arg(short, long)]
    pub quiet: bool,

    /// Format of diagnostics on stderr
    #[arg(long, value_enum, value_name = "FMT", default_value_t = LogFormat::Human)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Human,
    Json,
}

impl Cli {
    /// The HTML source selected by the flags; a URL wins over a file.
    pub fn source(&self) -> HtmlSource {
        match &self.url {
            Some(url) => HtmlSource::Url(url.clone()),
            None => HtmlSource::File(self.file.clone()),
        }
    }

    pub fn report_mode(&self) -> ReportMode {
        if self.quiet || ui::is_quiet() {
            return ReportMode::Quiet;
        }
        match self.log_format {
            LogFormat::Human => ReportMode::Human,
            LogFormat::Json => ReportMode::Json,
        }
    }
}

//! Loading raw HTML from a local file or a URL.
//!
//! URL loads run on a worker thread and report back through a one-shot
//! channel. The caller holds a [`PendingFetch`] and attaches the rest of the
//! run to its completion with [`PendingFetch::wait`].

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use ureq::Agent;
use url::Url;

use crate::error::{GraderError, Result};

/// Where the HTML under test comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    File(std::path::PathBuf),
    Url(String),
}

impl std::fmt::Display for HtmlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HtmlSource::File(path) => write!(f, "{}", path.display()),
            HtmlSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Read a local HTML file.
pub fn load_from_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(GraderError::NotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read(path).map_err(|source| GraderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// An HTTP GET that has been started but not yet completed.
pub struct PendingFetch {
    url: String,
    rx: mpsc::Receiver<Result<Vec<u8>>>,
}

impl PendingFetch {
    /// Block until the fetch completes and return its body.
    pub fn wait(self) -> Result<Vec<u8>> {
        match self.rx.recv() {
            Ok(result) => result,
            Err(_) => Err(GraderError::Fetch {
                url: self.url,
                message: "fetch worker exited without a response".to_string(),
            }),
        }
    }
}

/// Start fetching `url`. Only `http` and `https` URLs are accepted.
pub fn load_from_url(url: &str) -> Result<PendingFetch> {
    let parsed = validate_url(url)?;
    let (tx, rx) = mpsc::channel();

    let target = parsed.to_string();
    let worker_url = url.to_string();
    thread::Builder::new()
        .name("grader-fetch".to_string())
        .spawn(move || {
            let result = http_get(&target).map_err(|message| GraderError::Fetch {
                url: worker_url,
                message,
            });
            // Receiver may already be gone if the caller dropped the handle
            let _ = tx.send(result);
        })
        .map_err(|e| GraderError::Fetch {
            url: url.to_string(),
            message: format!("failed to start fetch: {}", e),
        })?;

    Ok(PendingFetch {
        url: url.to_string(),
        rx,
    })
}

/// Fetch `url` and wait for the body.
pub fn fetch_url(url: &str) -> Result<Vec<u8>> {
    load_from_url(url)?.wait()
}

fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| GraderError::Fetch {
        url: url.to_string(),
        message: format!("invalid URL: {}", e),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(GraderError::Fetch {
            url: url.to_string(),
            message: format!("unsupported URL scheme '{}'", other),
        }),
    }
}

/// GET `url` and return the body. Error statuses still carry a page to grade,
/// so only transport failures and unreadable bodies are errors.
fn http_get(url: &str) -> std::result::Result<Vec<u8>, String> {
    let agent = Agent::new();
    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(other) => return Err(other.to_string()),
    };

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| format!("failed to read response body: {}", e))?;
    Ok(body)
}

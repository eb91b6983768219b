use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ReaderError;

/// Download a feed document and return its body as text.
///
/// The body is decoded using the charset the server declares; bytes that
/// don't decode are replaced with U+FFFD instead of failing.
pub fn fetch_feed(url: &str, cfg: &Config) -> Result<String, ReaderError> {
    let client = Client::builder()
        .user_agent(cfg.user_agent.as_str())
        .timeout(cfg.timeout)
        .build()?;

    info!(url, "fetching feed");
    let resp = client.get(url).send()?;
    if !resp.status().is_success() {
        return Err(ReaderError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let body = resp.text()?;
    debug!(bytes = body.len(), "received feed body");

    Ok(body)
}

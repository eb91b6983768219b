use anyhow::{Context, Result};
use std::io;

use crate::Cli;
use crate::config::Config;
use crate::error::ReaderError;
use crate::feed::project;
use crate::fetch::fetch_feed;
use crate::render::{Mode, print_lines, render};

/// Fetch, project and print the feed named on the command line
pub fn run_command(cli: Cli, cfg: &Config) -> Result<()> {
    let url = cli.source.ok_or(ReaderError::MissingSource)?;
    let limit = cli.limit.or(cfg.default_limit);
    let mode = if cli.json || cfg.json { Mode::Json } else { Mode::Text };

    let xml = fetch_feed(&url, cfg)?;
    let lines = render_feed(&xml, limit, mode)?;

    // only write once everything rendered, so a failure never leaves partial output
    let stdout = io::stdout();
    print_lines(&lines, &mut stdout.lock()).context("Failed to write to stdout")?;
    Ok(())
}

/// Parse and render a feed document
pub fn render_feed(
    xml: &str,
    limit: Option<usize>,
    mode: Mode,
) -> Result<Vec<String>, ReaderError> {
    let channel = project(xml, limit)?;
    render(&channel, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<rss version="2.0"><channel>
        <title>Example</title>
        <link>http://example.com</link>
        <item><title>First</title></item>
        <item><title>Second</title></item>
    </channel></rss>"#;

    #[test]
    fn render_feed_runs_the_whole_pipeline() {
        let lines = render_feed(FEED, Some(1), Mode::Text).unwrap();
        assert_eq!(
            lines,
            vec!["Feed: Example", "Link: http://example.com", "", "Title: First"]
        );

        let lines = render_feed(FEED, None, Mode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn render_feed_surfaces_error_kinds() {
        let err = render_feed("<rss>", None, Mode::Text).unwrap_err();
        assert!(matches!(err, ReaderError::MalformedDocument(_)));

        let err = render_feed("<rss/>", None, Mode::Json).unwrap_err();
        assert!(matches!(err, ReaderError::MissingRequiredField("channel")));
    }

    #[test]
    fn missing_source_fails_before_fetching() {
        let cli = Cli {
            source: None,
            json: false,
            limit: None,
        };
        let err = run_command(cli, &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReaderError>(),
            Some(ReaderError::MissingSource)
        ));
    }
}

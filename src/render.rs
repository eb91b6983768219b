use std::io::{self, Write};

use crate::error::ReaderError;
use crate::feed::{ChannelRecord, ItemRecord, Text};

/// How a projected feed is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Json,
}

/// Render a channel into output lines (without trailing newlines)
pub fn render(channel: &ChannelRecord, mode: Mode) -> Result<Vec<String>, ReaderError> {
    match mode {
        Mode::Json => Ok(vec![serde_json::to_string_pretty(channel)?]),
        Mode::Text => Ok(render_text(channel)),
    }
}

/// Write lines joined by newlines, with a trailing newline
pub fn print_lines<W: Write>(lines: &[String], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", lines.join("\n"))?;
    out.flush()
}

fn render_text(channel: &ChannelRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Feed: {}", text(&channel.title)),
        format!("Link: {}", text(&channel.link)),
    ];

    push_field(&mut lines, "Last Build Date", &channel.last_build_date);
    push_field(&mut lines, "Publish Date", &channel.pub_date);
    push_field(&mut lines, "Language", &channel.language);
    push_categories(&mut lines, &channel.categories);
    push_field(&mut lines, "Editor", &channel.managing_editor);
    push_field(&mut lines, "Description", &channel.description);

    for item in &channel.items {
        lines.push(String::new());
        push_item(&mut lines, item);
    }

    lines
}

fn push_item(lines: &mut Vec<String>, item: &ItemRecord) {
    push_field(lines, "Title", &item.title);
    push_field(lines, "Author", &item.author);
    push_field(lines, "Published", &item.pub_date);
    push_field(lines, "Link", &item.link);
    push_categories(lines, &item.categories);

    // description gets its own paragraph
    if let Some(desc) = &item.description {
        lines.push(String::new());
        lines.push(text(desc).to_string());
    }
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &Option<Text>) {
    if let Some(v) = value {
        lines.push(format!("{label}: {}", text(v)));
    }
}

fn push_categories(lines: &mut Vec<String>, cats: &Option<Vec<Text>>) {
    if let Some(cats) = cats {
        let joined = cats.iter().map(text).collect::<Vec<_>>().join(", ");
        lines.push(format!("Categories: {joined}"));
    }
}

fn text(value: &Text) -> &str {
    value.as_deref().unwrap_or("")
}

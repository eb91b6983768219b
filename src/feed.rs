use roxmltree::{Document, Node, ParsingOptions};
use serde::Serialize;
use tracing::debug;

use crate::error::ReaderError;

/// Text of an element that exists in the document.
/// `None` means the element was there but carried no text (`<author/>`).
pub type Text = Option<String>;

/// Channel metadata plus the (possibly truncated) item list.
///
/// Optional fields are `Some` only when the element exists in the source, so
/// JSON output omits absent keys and prints `null` for empty elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRecord {
    pub title: Text,
    pub link: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_build_date: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<Text>,
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Text>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_editor: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Text>,
    pub items: Vec<ItemRecord>,
}

/// A single entry of the channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Text>,
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Text>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Text>,
}

/// Parse an RSS document and project the channel into a `ChannelRecord`.
///
/// `limit` keeps only the first N items in document order; `None` keeps all.
pub fn project(xml: &str, limit: Option<usize>) -> Result<ChannelRecord, ReaderError> {
    // RSS 0.91 feeds still ship a DOCTYPE
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, opts)?;

    let channel = child(doc.root_element(), "channel")
        .ok_or(ReaderError::MissingRequiredField("channel"))?;

    let title =
        field(channel, "title").ok_or(ReaderError::MissingRequiredField("channel/title"))?;
    let link = field(channel, "link").ok_or(ReaderError::MissingRequiredField("channel/link"))?;

    let all_items: Vec<Node> = children(channel, "item").collect();
    let total = all_items.len();
    let keep = limit.map_or(total, |l| l.min(total));

    let items: Vec<ItemRecord> = all_items.into_iter().take(keep).map(project_item).collect();

    debug!(total, kept = items.len(), "projected channel items");

    Ok(ChannelRecord {
        title,
        link,
        last_build_date: field(channel, "lastBuildDate"),
        language: field(channel, "language"),
        pub_date: field(channel, "pubDate"),
        categories: categories(channel),
        managing_editor: field(channel, "managingEditor"),
        description: field(channel, "description"),
        items,
    })
}

fn project_item(item: Node) -> ItemRecord {
    ItemRecord {
        title: field(item, "title"),
        author: field(item, "author"),
        pub_date: field(item, "pubDate"),
        link: field(item, "link"),
        categories: categories(item),
        description: field(item, "description"),
    }
}

/// Plain RSS elements only: `atom:link` or `itunes:author` never stand in for them
fn is_named(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && node.tag_name().name() == name
}

fn children<'a, 'input, 'n>(
    node: Node<'a, 'input>,
    name: &'n str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |c| is_named(c, name))
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| is_named(c, name))
}

/// Text of the first `name` child, if that child exists
fn field(node: Node, name: &str) -> Option<Text> {
    child(node, name).map(text_of)
}

/// Text up to the first child element, with comments skipped
fn text_of(node: Node) -> Text {
    let parts: Vec<&str> = node
        .children()
        .take_while(|c| !c.is_element())
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();

    if parts.is_empty() { None } else { Some(parts.concat()) }
}

/// All `category` children in document order, or `None` when there are none
fn categories(node: Node) -> Option<Vec<Text>> {
    let cats: Vec<Text> = children(node, "category").map(text_of).collect();

    if cats.is_empty() { None } else { Some(cats) }
}

//! Allow-list HTML sanitizer.
//!
//! Parses untrusted markup into a tree and re-serializes it from
//! scratch. Three operations cover everything: drop a node with its
//! subtree (blocked elements), splice a node's children into its place
//! (unknown-but-harmless wrappers), and rebuild the attribute set from
//! a per-tag safe subset (allow-listed elements). No attribute is ever
//! copied verbatim from input, and all text and attribute values are
//! re-escaped on output.

use once_cell::sync::Lazy;
use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::{Html, Node};
use std::collections::HashSet;
use tracing::debug;

use crate::sanitizer::urls;

/// Removed entirely, descendants and text included. Never unwrapped.
static REMOVED_WITH_CONTENT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["script", "style", "iframe", "object", "embed", "link", "meta"]
        .into_iter()
        .collect()
});

static ALLOWED_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "b", "strong", "i", "em", "u", "s", "p", "div", "ul", "ol", "li", "br", "img", "h1",
        "h2", "h3", "h4", "h5", "h6", "blockquote", "code", "pre", "span", "table", "thead",
        "tbody", "tr", "td", "th", "figure", "figcaption", "video", "source", "hr", "small", "sup",
        "sub",
    ]
    .into_iter()
    .collect()
});

/// Whether an element with this tag name survives sanitization.
pub fn is_allowed_tag(name: &str) -> bool {
    ALLOWED_TAGS.contains(name)
}

/// Reduce arbitrary markup to the allow-listed, attribute-rebuilt form.
///
/// Tolerant of malformed input: the parser recovers what it can and the
/// rest degrades to text. Idempotent: re-sanitizing safe markup is a
/// no-op.
pub fn sanitize(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut out = String::with_capacity(markup.len());
    write_node(fragment.tree.root(), &mut out);
    out
}

fn write_node(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => push_escaped_text(out, &text.text),
        Node::Element(element) => {
            let name = element.name();
            if REMOVED_WITH_CONTENT.contains(name) {
                debug!(tag = name, "dropping blocked element with contents");
                return;
            }
            if !ALLOWED_TAGS.contains(name) {
                // Unwrap: children take the element's place. This also
                // strips the parser's synthetic <html> wrapper.
                write_children(node, out);
                return;
            }
            match name {
                "img" => write_img(element, out),
                "source" => write_source(element, out),
                _ => write_element(node, element, name, out),
            }
        }
        Node::Fragment | Node::Document => write_children(node, out),
        // comments, doctypes, processing instructions do not survive
        _ => {}
    }
}

fn write_children(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        write_node(child, out);
    }
}

fn write_element(node: NodeRef<'_, Node>, element: &Element, name: &str, out: &mut String) {
    out.push('<');
    out.push_str(name);
    match name {
        "a" => {
            // Unsafe href degrades to a plain inline container; the
            // original target/rel are never honored.
            if let Some(href) = element.attr("href") {
                let href = urls::normalize(href);
                if urls::is_safe_absolute_url(&href) {
                    push_attr(out, "href", &href);
                    push_attr(out, "target", "_blank");
                    push_attr(out, "rel", "noopener noreferrer");
                } else {
                    debug!("dropping unsafe link href");
                }
            }
        }
        "video" => {
            if let Some(src) = element.attr("src") {
                let src = urls::normalize(src);
                if urls::is_safe_absolute_url(&src) {
                    push_attr(out, "src", &src);
                    push_attr(out, "controls", "true");
                } else {
                    debug!("dropping unsafe video src");
                }
            }
        }
        "table" => push_attr(out, "border", "0"),
        _ => {}
    }
    out.push('>');
    if matches!(name, "br" | "hr") {
        return;
    }
    write_children(node, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

// Images fail closed: a broken or unsafe image has no safe degraded
// form, so the whole element goes.
fn write_img(element: &Element, out: &mut String) {
    let Some(src) = element.attr("src") else {
        return;
    };
    let src = urls::normalize(src);
    if !urls::is_safe_absolute_url(&src) {
        debug!("dropping img with unsafe src");
        return;
    }
    out.push_str("<img");
    push_attr(out, "src", &src);
    push_attr(out, "loading", "lazy");
    out.push('>');
}

fn write_source(element: &Element, out: &mut String) {
    let Some(src) = element.attr("src") else {
        return;
    };
    let src = urls::normalize(src);
    if !urls::is_safe_absolute_url(&src) {
        debug!("dropping source with unsafe src");
        return;
    }
    out.push_str("<source");
    push_attr(out, "src", &src);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn push_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

//! HTML serialization of surfaces and whole pages.

use std::fmt::Write;

use ego_tree::NodeRef;

use super::dom::{DomNode, Surface};

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// What: Escape text content for inclusion between tags.
///
/// Inputs:
/// - `text`: Raw text.
///
/// Output:
/// - Text with `&`, `<` and `>` replaced by entities.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// What: Escape an attribute value for a double-quoted attribute.
///
/// Inputs:
/// - `value`: Raw attribute value.
///
/// Output:
/// - Value with `&`, `<`, `>` and `"` replaced by entities.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// What: Write one node and its subtree as HTML.
fn write_node(out: &mut String, node: NodeRef<'_, DomNode>) {
    match node.value() {
        DomNode::Text(text) => out.push_str(&escape_text(text)),
        DomNode::Element(el) => {
            out.push('<');
            out.push_str(el.tag);
            for (name, value) in &el.attrs {
                // Boolean attributes carry an empty value.
                if value.is_empty() {
                    let _ = write!(out, " {name}");
                } else {
                    let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
                }
            }
            out.push('>');
            if VOID_TAGS.contains(&el.tag) {
                return;
            }
            for child in node.children() {
                write_node(out, child);
            }
            let _ = write!(out, "</{}>", el.tag);
        }
    }
}

/// What: Serialize a surface, including its container element.
///
/// Inputs:
/// - `surface`: Rendered surface.
///
/// Output:
/// - Compact HTML string.
#[must_use]
pub fn surface_to_html(surface: &Surface) -> String {
    node_to_html(surface.root())
}

/// What: Serialize any node and its subtree.
///
/// Inputs:
/// - `node`: Subtree root.
///
/// Output:
/// - Compact HTML string.
#[must_use]
pub fn node_to_html(node: NodeRef<'_, DomNode>) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

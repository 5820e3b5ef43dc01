//! Plain-text rendering of surfaces for terminal output.

use ego_tree::NodeRef;

use super::dom::{DomNode, Surface};

/// What: Collapse whitespace runs in the text of a subtree into single spaces.
fn collapsed_text(node: NodeRef<'_, DomNode>) -> String {
    let mut buf = String::new();
    for n in node.descendants() {
        if let DomNode::Text(t) = n.value() {
            if !buf.is_empty() && !buf.ends_with(' ') {
                buf.push(' ');
            }
            buf.push_str(t);
        }
    }
    buf.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// What: Emit one line per card or placeholder, descending into sections.
fn collect_lines(node: NodeRef<'_, DomNode>, lines: &mut Vec<String>) {
    match node.value() {
        DomNode::Element(el) if el.tag == "section" => {
            for child in node.children() {
                collect_lines(child, lines);
            }
        }
        DomNode::Element(el) if el.has_class("badge") => {
            lines.push(format!("== {} ==", collapsed_text(node)));
        }
        _ => {
            let line = collapsed_text(node);
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }
}

/// What: Render a surface as plain text.
///
/// Inputs:
/// - `surface`: Rendered surface.
///
/// Output:
/// - Lines joined by `\n`: one per card or placeholder, section headings framed by `==`.
#[must_use]
pub fn surface_to_text(surface: &Surface) -> String {
    let mut lines = Vec::new();
    for child in surface.root().children() {
        collect_lines(child, &mut lines);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Talk, TargetId};
    use crate::view::model::{EmptyState, cards};
    use crate::view::page::Page;
    use crate::view::render::render;
    use reqwest::Url;

    #[test]
    /// What: Each talk becomes one collapsed line.
    ///
    /// Inputs:
    /// - One talk with slides.
    ///
    /// Output:
    /// - Single line containing title, event, date and the slides label.
    fn talk_lines() {
        let talks = vec![Talk {
            title: "Graph Minors".into(),
            event: "SODA".into(),
            date: "2024-01-08".into(),
            file: Some("slides.pdf".into()),
        }];
        let mut p = Page::with_all_targets(Url::parse("https://a.example/").expect("url"));
        render(
            &mut p,
            TargetId::PresentationsList,
            &cards(&talks),
            &EmptyState::presentations(),
        );
        let text = surface_to_text(p.surface(TargetId::PresentationsList).expect("surface"));
        assert_eq!(text, "Graph Minors SODA \u{b7} 2024-01-08 Slides");
    }
}

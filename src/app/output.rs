//! Serialization of a populated page view as an HTML document or plain text.

use std::fmt::Write;

use ego_tree::Tree;

use super::bootstrap::PageView;
use crate::state::{SortMode, TargetId};
use crate::view::DomNode;
use crate::view::dom::{Element, append_text_element};
use crate::view::html::{escape_attr, node_to_html, surface_to_html};
use crate::view::text::surface_to_text;

/// Id of the theme toggle button emitted in the document body.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// What: Build the markup tree of a control with its mirrored state.
fn control_tree(view: &PageView, target: TargetId) -> Option<Tree<DomNode>> {
    let controls = view.controls();
    let focused = controls.focused == Some(target);
    let tree = match target {
        TargetId::TeachingSearch => {
            let mut el = Element::new("input")
                .with_attr("id", target.dom_id())
                .with_attr("type", "search")
                .with_attr("value", controls.search_value.as_str());
            if focused {
                el = el.with_attr("autofocus", "");
            }
            Tree::new(DomNode::Element(el))
        }
        TargetId::TeachingSearchClear => {
            let mut el = Element::new("button")
                .with_attr("id", target.dom_id())
                .with_attr("type", "button");
            if controls.clear_disabled {
                el = el.with_attr("disabled", "");
            }
            let mut tree = Tree::new(DomNode::Element(el));
            tree.root_mut().append(DomNode::Text("Clear".to_string()));
            tree
        }
        TargetId::PubSort => {
            let select = Element::new("select").with_attr("id", target.dom_id());
            let mut tree = Tree::new(DomNode::Element(select));
            let mut root = tree.root_mut();
            for mode in SortMode::ALL {
                let mut option = Element::new("option").with_attr("value", mode.as_str());
                if mode == controls.sort {
                    option = option.with_attr("selected", "");
                }
                append_text_element(&mut root, option, mode.label());
            }
            tree
        }
        _ => return None,
    };
    Some(tree)
}

impl PageView {
    /// What: Serialize the page as a standalone HTML document.
    ///
    /// Inputs: None.
    ///
    /// Output:
    /// - Document whose `<html>` carries `data-theme`, with a theme toggle followed by
    ///   every present target in document order.
    #[must_use]
    pub fn to_html(&self) -> String {
        let toggle = self.theme().toggle_attributes();
        let mut out = String::new();
        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(
            out,
            "<html lang=\"en\" data-theme=\"{}\">",
            escape_attr(self.theme().as_str())
        );
        let _ = writeln!(
            out,
            "<head><meta charset=\"utf-8\"><title>Home</title></head>"
        );
        let _ = writeln!(out, "<body>");
        let _ = writeln!(
            out,
            "<button id=\"{THEME_TOGGLE_ID}\" type=\"button\" aria-pressed=\"{}\" aria-label=\"{}\">{}</button>",
            toggle.aria_pressed,
            escape_attr(toggle.aria_label),
            toggle.glyph
        );
        for target in TargetId::ALL {
            if !self.page().has(target) {
                continue;
            }
            if let Some(surface) = self.page().surface(target) {
                let _ = writeln!(out, "{}", surface_to_html(surface));
            } else if let Some(tree) = control_tree(self, target) {
                let _ = writeln!(out, "{}", node_to_html(tree.root()));
            }
        }
        let _ = writeln!(out, "</body>");
        let _ = write!(out, "</html>");
        out
    }

    /// What: Render the page as plain text for terminal output.
    ///
    /// Inputs: None.
    ///
    /// Output:
    /// - One `# <id>` header per present surface followed by its card lines; blank line between.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.page()
            .surfaces()
            .map(|s| {
                let body = surface_to_text(s);
                if body.is_empty() {
                    format!("# {}", s.target().dom_id())
                } else {
                    format!("# {}\n{body}", s.target().dom_id())
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

//! Minimal element tree backing each rendered surface.

use ego_tree::{NodeId, NodeMut, NodeRef, Tree};

use crate::state::TargetId;

/// Element with a tag name and ordered attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: &'static str,
    /// Attributes in insertion order; names are unique.
    pub attrs: Vec<(String, String)>,
}

impl Element {
    /// Element without attributes.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: set the `class` attribute.
    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// What: Set an attribute, replacing an existing value in place.
    ///
    /// Inputs:
    /// - `name`: Attribute name.
    /// - `value`: New value.
    ///
    /// Output:
    /// - Mutates `attrs`; attribute order is stable across repeated sets.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    /// Whether the whitespace-separated `class` list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }
}

/// Node stored in a surface tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomNode {
    /// Element node.
    Element(Element),
    /// Text node (unescaped).
    Text(String),
}

impl DomNode {
    /// Element payload, if any.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for DomNode {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

/// What: Append an element child and return a handle to it.
///
/// Inputs:
/// - `parent`: Node to append under.
/// - `element`: Element to append.
///
/// Output:
/// - Mutable handle of the new child.
pub fn append_element<'a>(parent: &'a mut NodeMut<'_, DomNode>, element: Element) -> NodeMut<'a, DomNode> {
    parent.append(DomNode::Element(element))
}

/// What: Append an element that holds a single text child.
///
/// Inputs:
/// - `parent`: Node to append under.
/// - `element`: Wrapper element.
/// - `text`: Text content (escaped later by the serializer).
pub fn append_text_element(parent: &mut NodeMut<'_, DomNode>, element: Element, text: &str) {
    let mut node = parent.append(DomNode::Element(element));
    node.append(DomNode::Text(text.to_string()));
}

/// Rendered content of one target.
#[derive(Clone, Debug)]
pub struct Surface {
    /// Target this surface renders into.
    target: TargetId,
    /// Tree rooted at the container element.
    tree: Tree<DomNode>,
}

impl Surface {
    /// Empty surface for `target`.
    #[must_use]
    pub fn new(target: TargetId) -> Self {
        Self {
            target,
            tree: Tree::new(Self::container(target)),
        }
    }

    /// What: Container node for `target`, carrying the element id.
    fn container(target: TargetId) -> DomNode {
        DomNode::Element(Element::new(target.container_tag()).with_attr("id", target.dom_id()))
    }

    /// Target this surface belongs to.
    #[must_use]
    pub const fn target(&self) -> TargetId {
        self.target
    }

    /// What: Drop all content under the container.
    ///
    /// Inputs: None.
    ///
    /// Output:
    /// - The surface is equivalent to a freshly created one.
    pub fn clear(&mut self) {
        self.tree = Tree::new(Self::container(self.target));
    }

    /// Mutable handle of the container.
    pub fn root_mut(&mut self) -> NodeMut<'_, DomNode> {
        self.tree.root_mut()
    }

    /// Container node.
    #[must_use]
    pub fn root(&self) -> NodeRef<'_, DomNode> {
        self.tree.root()
    }

    /// Whether the container has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.tree.root().has_children()
    }

    /// Iterate every element under the container (container excluded), in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.tree
            .root()
            .descendants()
            .skip(1)
            .filter_map(|n| n.value().as_element())
    }

    /// Number of elements with `tag` that carry `class` (any class when `None`).
    #[must_use]
    pub fn count(&self, tag: &str, class: Option<&str>) -> usize {
        self.elements()
            .filter(|el| el.tag == tag && class.is_none_or(|c| el.has_class(c)))
            .count()
    }

    /// What: Visit every element under the container mutably.
    ///
    /// Inputs:
    /// - `visit`: Callback invoked per element in document order.
    ///
    /// Output:
    /// - Elements may be modified in place; structure is unchanged.
    pub fn for_each_element_mut(&mut self, mut visit: impl FnMut(&mut Element)) {
        let ids: Vec<NodeId> = self
            .tree
            .root()
            .descendants()
            .skip(1)
            .map(|n| n.id())
            .collect();
        for id in ids {
            if let Some(mut node) = self.tree.get_mut(id)
                && let DomNode::Element(el) = node.value()
            {
                visit(el);
            }
        }
    }

    /// What: Concatenated text content of the surface.
    ///
    /// Inputs: None.
    ///
    /// Output:
    /// - All text nodes in document order, joined without separators.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.tree
            .root()
            .descendants()
            .filter_map(|n| match n.value() {
                DomNode::Text(t) => Some(t.as_str()),
                DomNode::Element(_) => None,
            })
            .collect()
    }
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && self.tree == other.tree
    }
}

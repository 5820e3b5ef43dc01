//! Stable identifiers of the page regions and controls the pipeline addresses.

/// Addressable page element.
///
/// Surfaces receive rendered content; controls (`TeachingSearch`,
/// `TeachingSearchClear`, `PubSort`) only carry mirrored state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetId {
    /// `#news-list`
    NewsList,
    /// `#teaching-search`
    TeachingSearch,
    /// `#teaching-search-clear`
    TeachingSearchClear,
    /// `#teaching-list`
    TeachingList,
    /// `#pub-sort`
    PubSort,
    /// `#publications-list`
    PublicationsList,
    /// `#presentations-list`
    PresentationsList,
    /// `#research-lead`
    ResearchLead,
    /// `#research-topics`
    ResearchTopics,
}

impl TargetId {
    /// Every target in document order.
    pub const ALL: [Self; 9] = [
        Self::NewsList,
        Self::TeachingSearch,
        Self::TeachingSearchClear,
        Self::TeachingList,
        Self::PubSort,
        Self::PublicationsList,
        Self::PresentationsList,
        Self::ResearchLead,
        Self::ResearchTopics,
    ];

    /// Element id used in markup.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::NewsList => "news-list",
            Self::TeachingSearch => "teaching-search",
            Self::TeachingSearchClear => "teaching-search-clear",
            Self::TeachingList => "teaching-list",
            Self::PubSort => "pub-sort",
            Self::PublicationsList => "publications-list",
            Self::PresentationsList => "presentations-list",
            Self::ResearchLead => "research-lead",
            Self::ResearchTopics => "research-topics",
        }
    }

    /// What: Look up a target by its element id.
    ///
    /// Inputs:
    /// - `id`: Element id attribute value.
    ///
    /// Output:
    /// - `Some(target)` for one of the fixed ids; `None` otherwise.
    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.dom_id() == id)
    }

    /// Whether the renderer writes content into this target.
    #[must_use]
    pub const fn is_surface(self) -> bool {
        !matches!(
            self,
            Self::TeachingSearch | Self::TeachingSearchClear | Self::PubSort
        )
    }

    /// Container tag used when the pipeline builds the surface itself.
    #[must_use]
    pub const fn container_tag(self) -> &'static str {
        match self {
            Self::NewsList => "ul",
            Self::ResearchLead => "p",
            Self::TeachingSearch => "input",
            Self::TeachingSearchClear => "button",
            Self::PubSort => "select",
            Self::TeachingList
            | Self::PublicationsList
            | Self::PresentationsList
            | Self::ResearchTopics => "div",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Element ids round-trip and controls are not surfaces.
    ///
    /// Inputs:
    /// - All fixed targets and one unknown id.
    ///
    /// Output:
    /// - Every id resolves back to its target; the unknown id does not.
    fn dom_ids_resolve_back() {
        for t in TargetId::ALL {
            assert_eq!(TargetId::from_dom_id(t.dom_id()), Some(t));
        }
        assert_eq!(TargetId::from_dom_id("sidebar"), None);
        assert!(!TargetId::PubSort.is_surface());
        assert!(TargetId::ResearchLead.is_surface());
    }
}

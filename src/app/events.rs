//! Interaction events applied to a populated page view.

use tracing::debug;

use super::bootstrap::PageView;
use crate::logic::{apply_teaching_filter, normalize_links, normalize_query, present_publications};
use crate::state::{SortMode, TargetId};
use crate::theme::ToggleAttributes;

/// User interaction delivered to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// New text in `#teaching-search`.
    SearchInput(String),
    /// Activation of `#teaching-search-clear`.
    SearchClear,
    /// New value chosen in `#pub-sort`.
    SortChange(String),
    /// Activation of the theme toggle.
    ThemeToggle,
}

/// Result of dispatching one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The page had no control for the event; nothing changed.
    Ignored,
    /// Control state changed but no surface was re-rendered (collection not loaded).
    ControlsUpdated,
    /// A surface was re-rendered and links normalized again.
    Rerendered,
    /// The theme changed; carries the attributes mirrored on the toggle.
    ThemeChanged(ToggleAttributes),
}

impl PageView {
    /// What: Apply one interaction event.
    ///
    /// Inputs:
    /// - `event`: Interaction to apply.
    ///
    /// Output:
    /// - What the event changed.
    ///
    /// Details:
    /// - Search and sort events re-render from the retained collections; nothing is re-fetched.
    /// - Every re-render is followed by a link normalization pass.
    /// - Events for controls the page does not contain are ignored.
    pub fn dispatch(&mut self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::SearchInput(value) => self.search(value, None),
            PageEvent::SearchClear => {
                if !self.page.has(TargetId::TeachingSearchClear) {
                    debug!("no clear control on page; ignoring");
                    return EventOutcome::Ignored;
                }
                self.search(String::new(), Some(TargetId::TeachingSearch))
            }
            PageEvent::SortChange(value) => self.resort(&value),
            PageEvent::ThemeToggle => {
                let next = self.theme.toggled();
                self.theme = next;
                let attrs = self
                    .theme_store
                    .as_ref()
                    .map_or_else(|| next.toggle_attributes(), |store| store.apply(next));
                debug!(theme = next.as_str(), "theme toggled");
                EventOutcome::ThemeChanged(attrs)
            }
        }
    }

    /// What: Set the search text, mirror the clear control, and re-filter teaching.
    fn search(&mut self, value: String, focus: Option<TargetId>) -> EventOutcome {
        if !self.page.has(TargetId::TeachingSearch) {
            debug!("no search input on page; ignoring");
            return EventOutcome::Ignored;
        }
        self.controls.clear_disabled = normalize_query(&value).is_empty();
        self.controls.search_value = value;
        if focus.is_some() {
            self.controls.focused = focus;
        }
        let Some(courses) = &self.teaching else {
            return EventOutcome::ControlsUpdated;
        };
        apply_teaching_filter(&mut self.page, courses, &self.controls.search_value);
        normalize_links(&mut self.page);
        EventOutcome::Rerendered
    }

    /// What: Change the publication ordering and re-render both sections.
    fn resort(&mut self, value: &str) -> EventOutcome {
        if !self.page.has(TargetId::PubSort) {
            debug!("no sort selector on page; ignoring");
            return EventOutcome::Ignored;
        }
        self.controls.sort = SortMode::from_selector(value);
        let Some(groups) = &self.publications else {
            return EventOutcome::ControlsUpdated;
        };
        present_publications(&mut self.page, groups, self.controls.sort);
        normalize_links(&mut self.page);
        EventOutcome::Rerendered
    }
}

//! Page bootstrap: load every collection the page has a target for, render, normalize links.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::logic::{
    apply_teaching_filter, normalize_links, normalize_query, order_announcements,
    present_publications,
};
use crate::sources::{DataSource, Resource, load};
use crate::state::{Announcement, Course, PublicationGroups, ResearchPage, SortMode, Talk, TargetId};
use crate::theme::{ThemeMode, ThemeStore};
use crate::view::{EmptyState, Page, cards, render, render_text};

/// Mirrored state of the interactive controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    /// Current text of `#teaching-search`.
    pub search_value: String,
    /// Whether `#teaching-search-clear` is disabled.
    pub clear_disabled: bool,
    /// Control holding focus after the last interaction.
    pub focused: Option<TargetId>,
    /// Current value of `#pub-sort`.
    pub sort: SortMode,
}

impl Controls {
    /// What: Build control state for an initial query and sort.
    ///
    /// Inputs:
    /// - `query`: Initial search text (may be blank).
    /// - `sort`: Initial publication ordering.
    ///
    /// Output:
    /// - Controls with the clear button disabled iff the normalized query is empty.
    #[must_use]
    pub fn new(query: impl Into<String>, sort: SortMode) -> Self {
        let search_value = query.into();
        let clear_disabled = normalize_query(&search_value).is_empty();
        Self {
            search_value,
            clear_disabled,
            focused: None,
            sort,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(String::new(), SortMode::default())
    }
}

/// One populated page view: surfaces, retained collections and control state.
#[derive(Debug)]
pub struct PageView {
    /// Surfaces being rendered.
    pub(crate) page: Page,
    /// Teaching collection, retained for re-filtering.
    pub(crate) teaching: Option<Vec<Course>>,
    /// Publication groups, retained for re-sorting.
    pub(crate) publications: Option<PublicationGroups>,
    /// Control mirror.
    pub(crate) controls: Controls,
    /// Active theme.
    pub(crate) theme: ThemeMode,
    /// Where theme toggles persist, if anywhere.
    pub(crate) theme_store: Option<ThemeStore>,
}

impl PageView {
    /// Rendered page.
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Current control state.
    #[must_use]
    pub const fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Loaded teaching collection, if the page had a teaching list and the load succeeded.
    #[must_use]
    pub fn teaching(&self) -> Option<&[Course]> {
        self.teaching.as_deref()
    }

    /// Loaded publication groups, if any.
    #[must_use]
    pub const fn publications(&self) -> Option<&PublicationGroups> {
        self.publications.as_ref()
    }

    /// What: Attach a theme store; the stored preference becomes the active theme.
    ///
    /// Inputs:
    /// - `store`: Persistent single-flag store.
    ///
    /// Output:
    /// - Updated view.
    #[must_use]
    pub fn with_theme_store(mut self, store: ThemeStore) -> Self {
        self.theme = store.preferred();
        self.theme_store = Some(store);
        self
    }
}

/// What: Load one resource when the page has a target for it.
///
/// Inputs:
/// - `page`: Page whose targets decide whether to load.
/// - `source`: Site root.
/// - `resource`: Resource to load.
///
/// Output:
/// - `Some(value)` on success; `None` when skipped or failed.
///
/// Details:
/// - Failures are logged and suppressed so the surface stays unpopulated.
async fn load_if<T: DeserializeOwned>(
    page: &Page,
    source: &DataSource,
    resource: Resource,
) -> Option<T> {
    if !resource.targets().iter().any(|t| page.has(*t)) {
        debug!(path = resource.path(), "no target on page; skipping load");
        return None;
    }
    match load::<T>(source, resource).await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = e.path(), error = %e, "surface left unpopulated");
            None
        }
    }
}

/// What: Populate every present surface from the site data and normalize links.
///
/// Inputs:
/// - `source`: Site root the `data/*.json` resources are read from.
/// - `page`: Page describing which targets exist.
/// - `controls`: Initial control values (search text, sort mode).
///
/// Output:
/// - `PageView` holding the rendered page and the collections needed for interaction.
///
/// Details:
/// - Loads run concurrently; one failing load never blocks or clears another surface.
/// - The link normalizer runs once after all surfaces are written.
pub async fn bootstrap(source: &DataSource, page: Page, controls: Controls) -> PageView {
    let (news, teaching, publications, talks, research) = futures::join!(
        load_if::<Vec<Announcement>>(&page, source, Resource::News),
        load_if::<Vec<Course>>(&page, source, Resource::Teaching),
        load_if::<PublicationGroups>(&page, source, Resource::Publications),
        load_if::<Vec<Talk>>(&page, source, Resource::Presentations),
        load_if::<ResearchPage>(&page, source, Resource::Research),
    );

    let mut view = PageView {
        page,
        teaching,
        publications,
        controls,
        theme: ThemeMode::default(),
        theme_store: None,
    };

    if let Some(items) = news {
        let ordered = order_announcements(&items);
        render(&mut view.page, TargetId::NewsList, &cards(ordered), &EmptyState::news());
    }
    if let Some(courses) = &view.teaching {
        apply_teaching_filter(&mut view.page, courses, &view.controls.search_value);
    }
    if let Some(groups) = &view.publications {
        present_publications(&mut view.page, groups, view.controls.sort);
    }
    if let Some(items) = talks {
        render(
            &mut view.page,
            TargetId::PresentationsList,
            &cards(&items),
            &EmptyState::presentations(),
        );
    }
    if let Some(research) = research {
        render_text(
            &mut view.page,
            TargetId::ResearchLead,
            research.lead.as_deref().unwrap_or_default(),
        );
        render(
            &mut view.page,
            TargetId::ResearchTopics,
            &cards(&research.topics),
            &EmptyState::research_topics(),
        );
    }

    let external = normalize_links(&mut view.page);
    info!(
        surfaces = view.page.surfaces().count(),
        external_links = external,
        "page bootstrapped"
    );
    view
}

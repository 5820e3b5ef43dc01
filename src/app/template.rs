//! Page description discovered from an HTML template.

use std::collections::BTreeSet;

use scraper::{Html, Selector};

use crate::state::{SortMode, TargetId};

/// Targets and initial control values a page template declares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageTemplate {
    /// Every known target carried by an element id in the template.
    pub targets: BTreeSet<TargetId>,
    /// Sort selected in `select#pub-sort`, when the selector exists and has options.
    pub initial_sort: Option<SortMode>,
    /// Value of `input#teaching-search`, empty when absent.
    pub initial_query: String,
}

impl PageTemplate {
    /// Template declaring every known target with default controls.
    #[must_use]
    pub fn all_targets() -> Self {
        Self {
            targets: TargetId::ALL.into_iter().collect(),
            initial_sort: None,
            initial_query: String::new(),
        }
    }
}

/// What: Discover targets and initial control values from template HTML.
///
/// Inputs:
/// - `html`: Template document text.
///
/// Output:
/// - `PageTemplate` listing every target whose id appears on some element.
///
/// Details:
/// - Initial sort comes from the `selected` option of `select#pub-sort`, else its first option.
///   Unknown option values fall back to newest with a warning.
/// - Ids that match no known target are ignored.
#[must_use]
pub fn discover(html: &str) -> PageTemplate {
    let document = Html::parse_document(html);
    let mut out = PageTemplate::default();

    if let Ok(sel) = Selector::parse("[id]") {
        out.targets = document
            .select(&sel)
            .filter_map(|el| el.value().id())
            .filter_map(TargetId::from_dom_id)
            .collect();
    }

    if let Ok(sel) = Selector::parse("select#pub-sort option") {
        let options: Vec<_> = document.select(&sel).collect();
        let chosen = options
            .iter()
            .find(|o| o.value().attr("selected").is_some())
            .or_else(|| options.first());
        out.initial_sort = chosen.map(|o| {
            let value = o
                .value()
                .attr("value")
                .map_or_else(|| o.text().collect::<String>(), str::to_string);
            SortMode::from_selector(value.trim())
        });
    }

    if let Ok(sel) = Selector::parse("input#teaching-search")
        && let Some(input) = document.select(&sel).next()
    {
        out.initial_query = input.value().attr("value").unwrap_or_default().to_string();
    }

    tracing::debug!(
        targets = out.targets.len(),
        sort = out.initial_sort.map(SortMode::as_str),
        "discovered page template"
    );
    out
}

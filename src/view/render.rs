//! List renderer and the DOM adapter that mounts view models into surfaces.

use ego_tree::NodeMut;
use tracing::debug;

use super::dom::{DomNode, Element, append_element, append_text_element};
use super::model::{
    CardView, CourseCard, EmptyState, LinkView, NewsCard, PublicationCard, TalkCard, TopicCard,
};
use super::page::Page;
use crate::state::TargetId;

/// Named group of cards rendered under a fixed heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView {
    /// Badge text above the group.
    pub heading: &'static str,
    /// Cards in display order.
    pub cards: Vec<CardView>,
}

/// What: Append a `div.link-row` with one anchor per link; nothing when `links` is empty.
fn mount_link_row(parent: &mut NodeMut<'_, DomNode>, links: &[LinkView]) {
    if links.is_empty() {
        return;
    }
    let mut row = append_element(parent, Element::new("div").with_class("link-row"));
    for link in links {
        append_text_element(
            &mut row,
            Element::new("a")
                .with_class("resource-link")
                .with_attr("href", &link.href),
            &link.label,
        );
    }
}

/// What: Mount an announcement as `li.news-item.card`.
fn mount_news(parent: &mut NodeMut<'_, DomNode>, card: &NewsCard) {
    let mut li = append_element(parent, Element::new("li").with_class("news-item card"));
    append_text_element(
        &mut li,
        Element::new("div").with_class("news-item__date"),
        &card.date,
    );
    {
        let mut title = append_element(&mut li, Element::new("div").with_class("news-item__title"));
        append_text_element(&mut title, Element::new("strong"), &card.title);
    }
    if let Some(summary) = &card.summary {
        append_text_element(&mut li, Element::new("div").with_class("muted"), summary);
    }
    if let Some(details) = &card.details {
        mount_link_row(&mut li, std::slice::from_ref(details));
    }
}

/// What: Mount a course as `article.card`, with a materials list only when resources exist.
fn mount_course(parent: &mut NodeMut<'_, DomNode>, card: &CourseCard) {
    let mut article = append_element(parent, Element::new("article").with_class("card"));
    append_text_element(&mut article, Element::new("h3"), &card.course);
    append_text_element(&mut article, Element::new("div").with_class("muted"), &card.term);
    if let Some(description) = &card.description {
        append_text_element(&mut article, Element::new("p"), description);
    }
    if card.resources.is_empty() {
        return;
    }
    let mut list = append_element(
        &mut article,
        Element::new("ul")
            .with_class("resources")
            .with_attr("aria-label", "Course materials"),
    );
    for resource in &card.resources {
        let mut li = append_element(&mut list, Element::new("li"));
        append_text_element(
            &mut li,
            Element::new("a")
                .with_class("resource-link")
                .with_attr("href", &resource.href),
            &resource.label,
        );
    }
}

/// What: Mount a publication as `div.card.publication` with main and right columns.
fn mount_publication(parent: &mut NodeMut<'_, DomNode>, card: &PublicationCard) {
    let mut outer = append_element(parent, Element::new("div").with_class("card publication"));
    {
        let mut main = append_element(&mut outer, Element::new("div").with_class("pub-main"));
        append_text_element(&mut main, Element::new("h3"), &card.title);
        append_text_element(
            &mut main,
            Element::new("div").with_class("publication__meta"),
            &card.authors,
        );
        append_text_element(
            &mut main,
            Element::new("div").with_class("publication__meta"),
            &card.venue,
        );
    }
    if card.year.is_none() && card.links.is_empty() {
        return;
    }
    let mut right = append_element(&mut outer, Element::new("div").with_class("pub-right"));
    if let Some(year) = &card.year {
        append_text_element(&mut right, Element::new("span").with_class("tag-year"), year);
    }
    mount_link_row(&mut right, &card.links);
}

/// What: Mount a talk as `article.card` with an `event · date` line.
fn mount_talk(parent: &mut NodeMut<'_, DomNode>, card: &TalkCard) {
    let mut article = append_element(parent, Element::new("article").with_class("card"));
    append_text_element(&mut article, Element::new("h3"), &card.title);
    append_text_element(
        &mut article,
        Element::new("div").with_class("muted"),
        &format!("{} \u{b7} {}", card.event, card.date),
    );
    if let Some(slides) = &card.slides {
        mount_link_row(&mut article, std::slice::from_ref(slides));
    }
}

/// What: Mount a research topic as `article.card`.
fn mount_topic(parent: &mut NodeMut<'_, DomNode>, card: &TopicCard) {
    let mut article = append_element(parent, Element::new("article").with_class("card"));
    append_text_element(&mut article, Element::new("h3"), &card.title);
    if let Some(summary) = &card.summary {
        append_text_element(&mut article, Element::new("p"), summary);
    }
}

/// What: Mount one card under `parent`.
///
/// Inputs:
/// - `parent`: Node receiving the card.
/// - `card`: View model to mount.
///
/// Output:
/// - Appends exactly one top-level element for the card.
pub fn mount_card(parent: &mut NodeMut<'_, DomNode>, card: &CardView) {
    match card {
        CardView::News(c) => mount_news(parent, c),
        CardView::Course(c) => mount_course(parent, c),
        CardView::Publication(c) => mount_publication(parent, c),
        CardView::Talk(c) => mount_talk(parent, c),
        CardView::Topic(c) => mount_topic(parent, c),
    }
}

/// What: Append `items` (or the empty-state placeholder) under `parent`.
///
/// Inputs:
/// - `parent`: Node receiving the list.
/// - `items`: Cards in final display order.
/// - `empty`: Placeholder used when `items` is empty.
///
/// Output:
/// - Exactly one placeholder node when empty; otherwise one node per card in input order.
pub fn render_list(parent: &mut NodeMut<'_, DomNode>, items: &[CardView], empty: &EmptyState) {
    if items.is_empty() {
        append_text_element(
            parent,
            Element::new(empty.tag).with_class(empty.class),
            &empty.message,
        );
        return;
    }
    for card in items {
        mount_card(parent, card);
    }
}

/// What: Replace the content of `target` with `items`.
///
/// Inputs:
/// - `page`: Page owning the surface.
/// - `target`: Surface to write.
/// - `items`: Cards already filtered and ordered upstream.
/// - `empty`: Placeholder used when `items` is empty.
///
/// Output:
/// - `true` when the surface exists and was rewritten; `false` when the page lacks it.
///
/// Details:
/// - The surface is cleared first, so repeated calls with the same input are idempotent.
/// - No other surface is touched.
pub fn render(page: &mut Page, target: TargetId, items: &[CardView], empty: &EmptyState) -> bool {
    let Some(surface) = page.surface_mut(target) else {
        debug!(target = target.dom_id(), "render target absent; skipping");
        return false;
    };
    surface.clear();
    let mut root = surface.root_mut();
    render_list(&mut root, items, empty);
    debug!(target = target.dom_id(), count = items.len(), "rendered list");
    true
}

/// What: Replace the content of `target` with a single text node.
///
/// Inputs:
/// - `page`: Page owning the surface.
/// - `target`: Surface to write.
/// - `text`: Text content; empty text leaves the surface empty.
///
/// Output:
/// - `true` when the surface exists and was rewritten.
pub fn render_text(page: &mut Page, target: TargetId, text: &str) -> bool {
    let Some(surface) = page.surface_mut(target) else {
        debug!(target = target.dom_id(), "text target absent; skipping");
        return false;
    };
    surface.clear();
    if !text.is_empty() {
        surface.root_mut().append(DomNode::Text(text.to_string()));
    }
    true
}

/// What: Replace the content of `target` with headed sections, each rendered as a list.
///
/// Inputs:
/// - `page`: Page owning the surface.
/// - `target`: Surface to write.
/// - `sections`: Groups in display order.
///
/// Output:
/// - `true` when the surface exists and was rewritten.
///
/// Details:
/// - Every section is emitted, empty ones with the `No entries yet.` placeholder.
pub fn render_sections(page: &mut Page, target: TargetId, sections: &[SectionView]) -> bool {
    let Some(surface) = page.surface_mut(target) else {
        debug!(target = target.dom_id(), "section target absent; skipping");
        return false;
    };
    surface.clear();
    let mut root = surface.root_mut();
    let placeholder = EmptyState::section();
    for section in sections {
        let mut node = append_element(&mut root, Element::new("section").with_class("pub-section"));
        append_text_element(
            &mut node,
            Element::new("div").with_class("badge"),
            section.heading,
        );
        render_list(&mut node, &section.cards, &placeholder);
    }
    true
}

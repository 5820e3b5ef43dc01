//! View models: one explicit shape per record kind, with optional fragments as `Option`.
//!
//! Conversions from records never mutate the source collection.

use crate::state::{Announcement, Course, Publication, ResearchTopic, Talk, YearToken};

/// Labelled link inside a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    /// Link target.
    pub href: String,
    /// Visible label.
    pub label: String,
}

impl LinkView {
    /// Build a link view.
    #[must_use]
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Announcement card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsCard {
    /// Date line.
    pub date: String,
    /// Bold title.
    pub title: String,
    /// Summary line, omitted when absent.
    pub summary: Option<String>,
    /// `Details` link row, omitted when absent.
    pub details: Option<LinkView>,
}

/// Course card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCard {
    /// Heading.
    pub course: String,
    /// Muted term line.
    pub term: String,
    /// Description paragraph, omitted when absent.
    pub description: Option<String>,
    /// Materials list; no list is emitted when empty.
    pub resources: Vec<LinkView>,
}

/// Publication card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicationCard {
    /// Heading.
    pub title: String,
    /// Author line.
    pub authors: String,
    /// Venue line.
    pub venue: String,
    /// Year tag, omitted when absent or blank.
    pub year: Option<String>,
    /// `PDF`/`Link`/`BibTeX` anchors in that order; no row when empty.
    pub links: Vec<LinkView>,
}

/// Talk card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TalkCard {
    /// Heading.
    pub title: String,
    /// Event name.
    pub event: String,
    /// Date text.
    pub date: String,
    /// `Slides` link row, omitted when absent.
    pub slides: Option<LinkView>,
}

/// Research topic card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCard {
    /// Heading.
    pub title: String,
    /// Summary paragraph, omitted when absent.
    pub summary: Option<String>,
}

/// One visual unit produced by the list renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardView {
    /// Announcement.
    News(NewsCard),
    /// Course.
    Course(CourseCard),
    /// Publication.
    Publication(PublicationCard),
    /// Talk.
    Talk(TalkCard),
    /// Research topic.
    Topic(TopicCard),
}

impl From<&Announcement> for CardView {
    fn from(item: &Announcement) -> Self {
        Self::News(NewsCard {
            date: item.date.clone(),
            title: item.title.clone(),
            summary: item.summary.clone(),
            details: item.link.as_ref().map(|l| LinkView::new(l, "Details")),
        })
    }
}

impl From<&Course> for CardView {
    fn from(course: &Course) -> Self {
        Self::Course(CourseCard {
            course: course.course.clone(),
            term: course.term.clone(),
            description: course.description.clone(),
            resources: course
                .resources
                .iter()
                .map(|r| LinkView::new(&r.file, &r.label))
                .collect(),
        })
    }
}

impl From<&Publication> for CardView {
    fn from(publication: &Publication) -> Self {
        let links = [
            (&publication.pdf, "PDF"),
            (&publication.link, "Link"),
            (&publication.bibtex, "BibTeX"),
        ]
        .into_iter()
        .filter_map(|(href, label)| href.as_ref().map(|h| LinkView::new(h, label)))
        .collect();
        Self::Publication(PublicationCard {
            title: publication.title.clone(),
            authors: publication.authors.clone(),
            venue: publication.venue.clone(),
            year: publication
                .year
                .as_ref()
                .filter(|y| !y.is_blank())
                .map(|y: &YearToken| y.as_str().to_string()),
            links,
        })
    }
}

impl From<&Talk> for CardView {
    fn from(talk: &Talk) -> Self {
        Self::Talk(TalkCard {
            title: talk.title.clone(),
            event: talk.event.clone(),
            date: talk.date.clone(),
            slides: talk.file.as_ref().map(|f| LinkView::new(f, "Slides")),
        })
    }
}

impl From<&ResearchTopic> for CardView {
    fn from(topic: &ResearchTopic) -> Self {
        Self::Topic(TopicCard {
            title: topic.title.clone(),
            summary: topic.summary.clone(),
        })
    }
}

/// What: Convert an ordered view of records into cards, preserving order.
///
/// Inputs:
/// - `records`: Records (owned slice elements or references).
///
/// Output:
/// - One card per record, same order.
pub fn cards<'a, R, I>(records: I) -> Vec<CardView>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    CardView: From<&'a R>,
{
    records.into_iter().map(CardView::from).collect()
}

/// Default empty-state text for the news list.
pub const NO_ANNOUNCEMENTS: &str = "No announcements yet.";
/// Default empty-state text for the teaching list.
pub const NO_TEACHING: &str = "No teaching items yet. Update data/teaching.json.";
/// Default empty-state text for the presentations list.
pub const NO_PRESENTATIONS: &str = "No presentations yet. Update data/presentations.json.";
/// Default empty-state text for research topics.
pub const NO_RESEARCH_TOPICS: &str = "No research topics added yet.";
/// Empty-state text for an empty publication section.
pub const NO_ENTRIES: &str = "No entries yet.";

/// Placeholder fragment shown when a list has nothing to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    /// Placeholder tag.
    pub tag: &'static str,
    /// Placeholder class list.
    pub class: &'static str,
    /// Placeholder text.
    pub message: String,
}

impl EmptyState {
    /// Muted paragraph placeholder with `message`.
    #[must_use]
    pub fn muted(message: impl Into<String>) -> Self {
        Self {
            tag: "p",
            class: "muted",
            message: message.into(),
        }
    }

    /// News list placeholder (a list item, since the container is a `ul`).
    #[must_use]
    pub fn news() -> Self {
        Self {
            tag: "li",
            class: "news-item",
            message: NO_ANNOUNCEMENTS.to_string(),
        }
    }

    /// Teaching placeholder when no query is active.
    #[must_use]
    pub fn teaching() -> Self {
        Self::muted(NO_TEACHING)
    }

    /// What: Teaching placeholder for a query with no matches.
    ///
    /// Inputs:
    /// - `display_query`: Query text as typed, surrounding whitespace trimmed, case kept.
    ///
    /// Output:
    /// - Muted paragraph `No courses match “<query>”.`
    #[must_use]
    pub fn teaching_no_match(display_query: &str) -> Self {
        Self::muted(format!("No courses match \u{201c}{display_query}\u{201d}."))
    }

    /// Presentations placeholder.
    #[must_use]
    pub fn presentations() -> Self {
        Self::muted(NO_PRESENTATIONS)
    }

    /// Research topics placeholder.
    #[must_use]
    pub fn research_topics() -> Self {
        Self::muted(NO_RESEARCH_TOPICS)
    }

    /// Publication section placeholder.
    #[must_use]
    pub fn section() -> Self {
        Self::muted(NO_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CourseResource;

    #[test]
    /// What: Publication links keep PDF/Link/BibTeX order and skip absent ones.
    ///
    /// Inputs:
    /// - Publication with bibtex and pdf but no link, and a blank year.
    ///
    /// Output:
    /// - Two links (PDF then BibTeX) and no year tag.
    fn publication_links_ordered_and_filtered() {
        let p = Publication {
            title: "T".into(),
            pdf: Some("p.pdf".into()),
            bibtex: Some("p.bib".into()),
            year: Some(YearToken::new(" ")),
            ..Publication::default()
        };
        let CardView::Publication(card) = CardView::from(&p) else {
            panic!("expected publication card");
        };
        let labels: Vec<&str> = card.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["PDF", "BibTeX"]);
        assert!(card.year.is_none());
    }

    #[test]
    /// What: Course cards carry every resource in order.
    ///
    /// Inputs:
    /// - Course with two resources.
    ///
    /// Output:
    /// - Resource links match file/label pairs in order.
    fn course_card_resources() {
        let c = Course {
            course: "Algorithms II".into(),
            term: "Spring".into(),
            resources: vec![
                CourseResource {
                    file: "s.pdf".into(),
                    label: "Syllabus".into(),
                },
                CourseResource {
                    file: "h1.pdf".into(),
                    label: "Homework 1".into(),
                },
            ],
            ..Course::default()
        };
        let CardView::Course(card) = CardView::from(&c) else {
            panic!("expected course card");
        };
        assert_eq!(card.resources[1], LinkView::new("h1.pdf", "Homework 1"));
    }

    #[test]
    /// What: The no-match placeholder embeds the query inside curly quotes.
    ///
    /// Inputs:
    /// - Query `Quantum`.
    ///
    /// Output:
    /// - Exact message text.
    fn no_match_message_embeds_query() {
        assert_eq!(
            EmptyState::teaching_no_match("Quantum").message,
            "No courses match \u{201c}Quantum\u{201d}."
        );
    }
}

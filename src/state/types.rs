//! Core record types loaded from the site's `data/*.json` collections.

use serde::{Deserialize, Deserializer, Serialize};

/// What: Deserialize an optional text field, treating blank strings as absent.
///
/// Inputs:
/// - `deserializer`: Serde deserializer positioned at the field value.
///
/// Output:
/// - `Some(text)` for non-blank strings; `None` for `null`, missing, or blank values.
///
/// # Errors
/// - Returns the deserializer error when the value is neither a string nor `null`.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// One entry of `data/news.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Sortable ISO-like date (e.g., `2025-03-14`).
    #[serde(default)]
    pub date: String,
    /// Headline text.
    #[serde(default)]
    pub title: String,
    /// Optional one-paragraph summary.
    #[serde(default, deserialize_with = "non_blank")]
    pub summary: Option<String>,
    /// Optional details link.
    #[serde(default, deserialize_with = "non_blank")]
    pub link: Option<String>,
}

/// Downloadable material attached to a course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResource {
    /// Link target of the material.
    #[serde(default)]
    pub file: String,
    /// Human readable label; also part of the search haystack.
    #[serde(default)]
    pub label: String,
}

/// One entry of `data/teaching.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (primary searchable field).
    #[serde(default)]
    pub course: String,
    /// Term or semester context.
    #[serde(default)]
    pub term: String,
    /// Optional description paragraph.
    #[serde(default, deserialize_with = "non_blank")]
    pub description: Option<String>,
    /// Ordered course materials; missing in JSON means none.
    #[serde(default)]
    pub resources: Vec<CourseResource>,
}

/// Raw JSON shape accepted for a publication year.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    /// `"year": 2023`
    Number(i64),
    /// `"year": 2023.0`
    Float(f64),
    /// `"year": "2023"` or any other token.
    Text(String),
    /// Booleans, arrays and objects.
    Other(serde_json::Value),
}

/// Publication year as it appeared in the data, with a numeric view for ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawYear", into = "String")]
pub struct YearToken {
    /// Token text exactly as displayed.
    raw: String,
}

impl From<RawYear> for YearToken {
    fn from(value: RawYear) -> Self {
        match value {
            RawYear::Number(n) => Self { raw: n.to_string() },
            RawYear::Float(f) if f.fract().abs() < f64::EPSILON => Self {
                raw: format!("{f:.0}"),
            },
            RawYear::Float(f) => Self { raw: f.to_string() },
            RawYear::Text(s) => Self { raw: s },
            RawYear::Other(v) => {
                tracing::warn!(value = %v, "publication year is not a number or string");
                Self { raw: v.to_string() }
            }
        }
    }
}

impl From<YearToken> for String {
    fn from(value: YearToken) -> Self {
        value.raw
    }
}

impl YearToken {
    /// Build a token from display text.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Display text of the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// What: Numeric value of the token used for `newest`/`oldest` ordering.
    ///
    /// Inputs: None.
    ///
    /// Output:
    /// - `Some(year)` when the trimmed token parses as an integer; `None` otherwise.
    #[must_use]
    pub fn numeric(&self) -> Option<i64> {
        self.raw.trim().parse::<i64>().ok()
    }

    /// Whether the token is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// One entry of either publication group in `data/publications.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Paper title.
    #[serde(default)]
    pub title: String,
    /// Author list as a single display string.
    #[serde(default)]
    pub authors: String,
    /// Journal, conference or archive.
    #[serde(default)]
    pub venue: String,
    /// Optional year token.
    #[serde(default)]
    pub year: Option<YearToken>,
    /// Optional PDF link.
    #[serde(default, deserialize_with = "non_blank")]
    pub pdf: Option<String>,
    /// Optional landing page link.
    #[serde(default, deserialize_with = "non_blank")]
    pub link: Option<String>,
    /// Optional BibTeX file link.
    #[serde(default, deserialize_with = "non_blank")]
    pub bibtex: Option<String>,
}

/// Group a publication was loaded under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PublicationCategory {
    /// Preprints and manuscripts in communication.
    Preprint,
    /// Published, peer-reviewed work.
    PeerReviewed,
}

impl PublicationCategory {
    /// Section order on the page.
    pub const ALL: [Self; 2] = [Self::Preprint, Self::PeerReviewed];

    /// Fixed heading rendered above the group.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Preprint => "Preprints / In Communication",
            Self::PeerReviewed => "Peer-reviewed",
        }
    }
}

/// Top-level shape of `data/publications.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationGroups {
    /// Records in the preprint group.
    #[serde(default)]
    pub preprints: Vec<Publication>,
    /// Records in the peer-reviewed group.
    #[serde(default, rename = "peerReviewed")]
    pub peer_reviewed: Vec<Publication>,
}

impl PublicationGroups {
    /// Records of one group, in loaded order.
    #[must_use]
    pub fn group(&self, category: PublicationCategory) -> &[Publication] {
        match category {
            PublicationCategory::Preprint => &self.preprints,
            PublicationCategory::PeerReviewed => &self.peer_reviewed,
        }
    }
}

/// One entry of `data/presentations.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    /// Talk title.
    #[serde(default)]
    pub title: String,
    /// Event or venue name.
    #[serde(default)]
    pub event: String,
    /// Display date.
    #[serde(default)]
    pub date: String,
    /// Optional slides link.
    #[serde(default, deserialize_with = "non_blank")]
    pub file: Option<String>,
}

/// One research topic card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchTopic {
    /// Topic title.
    #[serde(default)]
    pub title: String,
    /// Optional topic summary.
    #[serde(default, deserialize_with = "non_blank")]
    pub summary: Option<String>,
}

/// Top-level shape of `data/research.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchPage {
    /// Optional lead paragraph.
    #[serde(default, deserialize_with = "non_blank")]
    pub lead: Option<String>,
    /// Ordered topics.
    #[serde(default)]
    pub topics: Vec<ResearchTopic>,
}

/// Publication ordering selectable from the `pub-sort` control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Descending year; ties keep loaded order.
    #[default]
    Newest,
    /// Ascending year; ties keep loaded order.
    Oldest,
    /// Ascending title.
    Title,
}

impl SortMode {
    /// Every mode in selector order.
    pub const ALL: [Self; 3] = [Self::Newest, Self::Oldest, Self::Title];

    /// Selector value for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
        }
    }

    /// Option label shown in the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
            Self::Title => "Title (A–Z)",
        }
    }

    /// What: Parse an exact selector value.
    ///
    /// Inputs:
    /// - `value`: Raw selector value.
    ///
    /// Output:
    /// - `Some(mode)` for `newest`, `oldest`, `title`; `None` for anything else.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }

    /// What: Resolve a selector value, falling back to `Newest` for unknown input.
    ///
    /// Inputs:
    /// - `value`: Raw selector value.
    ///
    /// Output:
    /// - The matching mode, or `Newest` (with a warning) when unrecognized.
    #[must_use]
    pub fn from_selector(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            tracing::warn!(value, "unrecognized sort mode; using newest");
            Self::Newest
        })
    }
}

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Canonical scheme record returned to callers. Every field is populated;
/// the normalizer substitutes documented defaults for anything the upstream
/// source omits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub title: String,
    pub description: String,
    pub category: SchemeCategory,
    pub deadline: String,
    pub link: String,
}

/// Canonical news record. `category` carries the originating query's label
/// verbatim; news items are not reclassified from content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRecord {
    pub title: String,
    pub summary: String,
    pub date: String,
    pub source: String,
    pub category: String,
    pub link: String,
}

impl NewsRecord {
    /// A record is external when its link is a full URL; anything else is
    /// treated as an internal route by the display layer.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http://") || self.link.starts_with("https://")
    }
}

/// Closed category set for schemes. Raw upstream category text never passes
/// through; the classifier resolves one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum SchemeCategory {
    Agriculture,
    Healthcare,
    Education,
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Relevance,
    Latest,
    Deadline,
}

/// Supported display languages. Unrecognized codes fall back to English,
/// which maps to the `en-US` upstream locale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
}

impl Language {
    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Hi => "hi-IN",
            Language::Mr => "mr-IN",
        }
    }

    /// Parses a caller-supplied language code, defaulting to English for
    /// anything outside the supported set.
    pub fn parse_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

/// Optional location details read from the caller's profile, used to bias
/// upstream news queries. Never persisted by the core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationContext {
    pub village: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
}

impl LocationContext {
    /// Joins the populated parts as `village, district, state`. An all-empty
    /// context yields an empty string and is omitted from upstream queries.
    pub fn display_string(&self) -> String {
        [&self.village, &self.district, &self.state]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

//! Parsing boundary that turns raw scrape payloads into canonical scheme
//! records. All type checking of the untrusted upstream JSON happens here.

use serde_json::Value;

use shared::dto::{SchemeCategory, SchemeRecord, SortOrder};

const UNTITLED: &str = "Untitled Scheme";
const NO_DESCRIPTION: &str = "No description available";
const NO_DEADLINE: &str = "Ongoing";
const NO_LINK: &str = "#";

/// Extracts the usable records from a raw scrape payload. Missing or
/// non-string fields fall back to their documented defaults; a record whose
/// title resolves to the sentinel is not a real record and is dropped.
pub fn normalize_schemes(
    payload: &Value,
    query_category: &str,
    site_origin: &str,
) -> Vec<SchemeRecord> {
    let Some(items) = payload.get("data").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let title = string_field(item, "title").unwrap_or_else(|| UNTITLED.to_string());
            if title == UNTITLED {
                return None;
            }
            let seed =
                string_field(item, "category").unwrap_or_else(|| query_category.to_string());
            Some(SchemeRecord {
                title,
                description: string_field(item, "description")
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                category: classify(&seed),
                deadline: string_field(item, "deadline")
                    .unwrap_or_else(|| NO_DEADLINE.to_string()),
                link: absolutize_link(string_field(item, "link"), site_origin),
            })
        })
        .collect()
}

/// Maps noisy category text onto the closed scheme category set by
/// case-insensitive substring match; the first keyword group that matches
/// wins.
pub fn classify(raw: &str) -> SchemeCategory {
    let text = raw.to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    if matches_any(&["agriculture", "farming", "rural"]) {
        SchemeCategory::Agriculture
    } else if matches_any(&["health", "medical", "wellness"]) {
        SchemeCategory::Healthcare
    } else if matches_any(&["education", "skill", "student"]) {
        SchemeCategory::Education
    } else {
        SchemeCategory::Other
    }
}

/// Orders records according to the caller's preference. Relevance keeps the
/// upstream order; latest reverses it; deadline sorts the deadline strings
/// lexicographically (stable for ties).
pub fn sort_schemes(mut records: Vec<SchemeRecord>, order: SortOrder) -> Vec<SchemeRecord> {
    match order {
        SortOrder::Relevance => {}
        SortOrder::Latest => records.reverse(),
        SortOrder::Deadline => records.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
    }
    records
}

// Non-string values are treated as absent so upstream type drift never
// reaches the caller.
fn string_field(item: &Value, key: &str) -> Option<String> {
    item.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|s| !s.is_empty())
}

fn absolutize_link(link: Option<String>, origin: &str) -> String {
    let Some(link) = link else {
        return NO_LINK.to_string();
    };
    if link.starts_with("http") {
        link
    } else if link.starts_with('/') {
        format!("{origin}{link}")
    } else {
        format!("{origin}/{link}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ORIGIN: &str = "https://www.myscheme.gov.in";

    #[test]
    fn untitled_records_are_dropped() {
        let payload = json!({
            "success": true,
            "data": [
                { "description": "no title at all" },
                { "title": null, "description": "null title" },
                { "title": "Untitled Scheme", "description": "sentinel title" },
                { "title": "Soil Health Card", "category": "agriculture" }
            ]
        });
        let records = normalize_schemes(&payload, "all", ORIGIN);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Soil Health Card");
    }

    #[test]
    fn missing_fields_get_documented_defaults() {
        let payload = json!({
            "success": true,
            "data": [{ "title": "Kisan Credit Card" }]
        });
        let records = normalize_schemes(&payload, "all", ORIGIN);
        assert_eq!(records[0].description, "No description available");
        assert_eq!(records[0].deadline, "Ongoing");
        assert_eq!(records[0].link, "#");
        assert_eq!(records[0].category, SchemeCategory::Other);
    }

    #[test]
    fn non_string_fields_are_treated_as_absent() {
        let payload = json!({
            "success": true,
            "data": [{
                "title": "Fasal Bima",
                "description": 42,
                "deadline": { "date": "2024-03-01" },
                "link": false,
                "category": ["agriculture"]
            }]
        });
        let records = normalize_schemes(&payload, "healthcare", ORIGIN);
        assert_eq!(records[0].description, "No description available");
        assert_eq!(records[0].deadline, "Ongoing");
        assert_eq!(records[0].link, "#");
        // category seed falls back to the query's own category
        assert_eq!(records[0].category, SchemeCategory::Healthcare);
    }

    #[test]
    fn relative_links_are_rewritten_absolute() {
        let payload = json!({
            "success": true,
            "data": [
                { "title": "PM-KISAN", "link": "/schemes/pm-kisan" },
                { "title": "PMFBY", "link": "schemes/pmfby" },
                { "title": "SHC", "link": "https://www.myscheme.gov.in/schemes/shc" }
            ]
        });
        let records = normalize_schemes(&payload, "all", ORIGIN);
        assert_eq!(records[0].link, "https://www.myscheme.gov.in/schemes/pm-kisan");
        assert_eq!(records[1].link, "https://www.myscheme.gov.in/schemes/pmfby");
        assert_eq!(records[2].link, "https://www.myscheme.gov.in/schemes/shc");
    }

    #[test]
    fn classifier_precedence_and_fallthrough() {
        assert_eq!(classify("Agriculture and Allied"), SchemeCategory::Agriculture);
        assert_eq!(classify("organic FARMING support"), SchemeCategory::Agriculture);
        assert_eq!(classify("Rural wellness mission"), SchemeCategory::Agriculture);
        assert_eq!(classify("Health and Wellness"), SchemeCategory::Healthcare);
        assert_eq!(classify("medical aid"), SchemeCategory::Healthcare);
        assert_eq!(classify("Skill Development"), SchemeCategory::Education);
        assert_eq!(classify("student grants"), SchemeCategory::Education);
        assert_eq!(classify("housing"), SchemeCategory::Other);
        assert_eq!(classify("all"), SchemeCategory::Other);
    }

    #[test]
    fn deadline_sort_is_lexicographic_and_idempotent() {
        let records = vec![
            scheme_with_deadline("a", "2024-03-01"),
            scheme_with_deadline("b", "Ongoing"),
            scheme_with_deadline("c", "2023-01-01"),
        ];
        let sorted = sort_schemes(records, SortOrder::Deadline);
        let deadlines: Vec<_> = sorted.iter().map(|r| r.deadline.as_str()).collect();
        assert_eq!(deadlines, ["2023-01-01", "2024-03-01", "Ongoing"]);

        let resorted = sort_schemes(sorted.clone(), SortOrder::Deadline);
        let again: Vec<_> = resorted.iter().map(|r| r.title.as_str()).collect();
        let before: Vec<_> = sorted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(again, before);
    }

    #[test]
    fn latest_sort_reverses_and_double_reversal_restores() {
        let records = vec![
            scheme_with_deadline("first", "Ongoing"),
            scheme_with_deadline("second", "Ongoing"),
            scheme_with_deadline("third", "Ongoing"),
        ];
        let reversed = sort_schemes(records.clone(), SortOrder::Latest);
        let titles: Vec<_> = reversed.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["third", "second", "first"]);

        let restored = sort_schemes(reversed, SortOrder::Latest);
        let titles: Vec<_> = restored.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn relevance_sort_preserves_upstream_order() {
        let records = vec![
            scheme_with_deadline("z", "2025-01-01"),
            scheme_with_deadline("a", "2020-01-01"),
        ];
        let kept = sort_schemes(records, SortOrder::Relevance);
        assert_eq!(kept[0].title, "z");
        assert_eq!(kept[1].title, "a");
    }

    fn scheme_with_deadline(title: &str, deadline: &str) -> SchemeRecord {
        SchemeRecord {
            title: title.into(),
            description: "No description available".into(),
            category: SchemeCategory::Other,
            deadline: deadline.into(),
            link: "#".into(),
        }
    }
}

//! Parsing boundary that turns raw news-search payloads into canonical
//! records. All type checking of the untrusted upstream JSON happens here.

use serde_json::Value;

use shared::dto::NewsRecord;

const UNTITLED: &str = "Untitled News";
const NO_SUMMARY: &str = "No details available";
const NO_DATE: &str = "Recent";
const NO_SOURCE: &str = "News Source";
const NO_LINK: &str = "#";

const SALVAGE_CAP: usize = 10;

/// Extracts news records from a raw search payload. Prefers the primary
/// news array; when that yields nothing, salvages well-formed entries from
/// the general organic results. Never fails; the result may be empty.
pub fn normalize_news(payload: &Value, category: &str) -> Vec<NewsRecord> {
    let records: Vec<NewsRecord> = array_field(payload, "news_results")
        .iter()
        .map(|item| news_record(item, category))
        .collect();
    if !records.is_empty() {
        return records;
    }
    salvage_organic(payload, category)
}

/// Best-effort extraction from the differently-shaped organic result list:
/// an entry qualifies when it has a title, a link, and at least one of
/// snippet or description.
fn salvage_organic(payload: &Value, category: &str) -> Vec<NewsRecord> {
    array_field(payload, "organic_results")
        .iter()
        .filter(|item| {
            string_field(item, "title").is_some()
                && string_field(item, "link").is_some()
                && (string_field(item, "snippet").is_some()
                    || string_field(item, "description").is_some())
        })
        .take(SALVAGE_CAP)
        .map(|item| news_record(item, category))
        .collect()
}

fn news_record(item: &Value, category: &str) -> NewsRecord {
    NewsRecord {
        title: string_field(item, "title").unwrap_or_else(|| UNTITLED.to_string()),
        summary: string_field(item, "snippet")
            .or_else(|| string_field(item, "description"))
            .unwrap_or_else(|| NO_SUMMARY.to_string()),
        date: string_field(item, "date").unwrap_or_else(|| NO_DATE.to_string()),
        source: string_field(item, "source").unwrap_or_else(|| NO_SOURCE.to_string()),
        // the originating query's label, never reclassified from content
        category: category.to_string(),
        link: string_field(item, "link").unwrap_or_else(|| NO_LINK.to_string()),
    }
}

fn array_field<'a>(payload: &'a Value, key: &str) -> &'a [Value] {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_field(item: &Value, key: &str) -> Option<String> {
    item.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_results_map_with_defaults() {
        let payload = json!({
            "news_results": [
                {
                    "title": "Village road repaired",
                    "snippet": "Work completed ahead of the monsoon.",
                    "date": "2 hours ago",
                    "source": "District News",
                    "link": "https://news.example/road"
                },
                {}
            ]
        });
        let records = normalize_news(&payload, "local news");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Village road repaired");
        assert_eq!(records[0].category, "local news");

        assert_eq!(records[1].title, "Untitled News");
        assert_eq!(records[1].summary, "No details available");
        assert_eq!(records[1].date, "Recent");
        assert_eq!(records[1].source, "News Source");
        assert_eq!(records[1].link, "#");
        assert_eq!(records[1].category, "local news");
    }

    #[test]
    fn non_string_fields_fall_back_to_defaults() {
        let payload = json!({
            "news_results": [{
                "title": "Health camp announced",
                "snippet": 12,
                "date": { "relative": "Yesterday" },
                "source": ["Health Dept"],
                "link": null
            }]
        });
        let records = normalize_news(&payload, "healthcare");
        assert_eq!(records[0].summary, "No details available");
        assert_eq!(records[0].date, "Recent");
        assert_eq!(records[0].source, "News Source");
        assert_eq!(records[0].link, "#");
    }

    #[test]
    fn organic_salvage_requires_title_link_and_details() {
        let payload = json!({
            "news_results": [],
            "organic_results": [
                { "title": "Usable", "link": "https://a.example", "snippet": "ok" },
                { "title": "No link", "snippet": "dropped" },
                { "link": "https://b.example", "snippet": "no title" },
                { "title": "No details", "link": "https://c.example" },
                { "title": "Described", "link": "https://d.example", "description": "long form" }
            ]
        });
        let records = normalize_news(&payload, "education");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Usable");
        assert_eq!(records[1].summary, "long form");
    }

    #[test]
    fn organic_salvage_caps_at_ten() {
        let entries: Vec<_> = (0..15)
            .map(|i| {
                json!({
                    "title": format!("Item {i}"),
                    "link": format!("https://example.org/{i}"),
                    "snippet": "details"
                })
            })
            .collect();
        let payload = json!({ "organic_results": entries });
        let records = normalize_news(&payload, "agriculture");
        assert_eq!(records.len(), 10);
    }

    #[test]
    fn missing_arrays_yield_empty() {
        let records = normalize_news(&json!({ "search_metadata": {} }), "agriculture");
        assert!(records.is_empty());
        let records = normalize_news(&json!({ "news_results": "not-a-list" }), "agriculture");
        assert!(records.is_empty());
    }
}

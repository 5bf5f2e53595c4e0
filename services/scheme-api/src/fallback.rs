//! Curated substitute data served when live aggregation fails or yields
//! nothing usable.

use shared::dto::{SchemeCategory, SchemeRecord};

/// Produces the fallback set for a requested category. The `all` view is a
/// fixed slice of two records from each domain set, in domain order; an
/// unknown category serves the agriculture set.
pub fn fallback_schemes(category: &str) -> Vec<SchemeRecord> {
    match category.to_lowercase().as_str() {
        "all" => {
            let mut set = Vec::with_capacity(6);
            set.extend(agriculture_schemes().into_iter().take(2));
            set.extend(healthcare_schemes().into_iter().take(2));
            set.extend(education_schemes().into_iter().take(2));
            set
        }
        "healthcare" => healthcare_schemes(),
        "education" => education_schemes(),
        _ => agriculture_schemes(),
    }
}

/// Applies the caller's search text as a case-insensitive substring filter
/// over title and description. An empty result here is final; the generator
/// never substitutes a second time.
pub fn filter_by_search(records: Vec<SchemeRecord>, search_query: &str) -> Vec<SchemeRecord> {
    if search_query.is_empty() {
        return records;
    }
    let needle = search_query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.description.to_lowercase().contains(&needle)
        })
        .collect()
}

fn agriculture_schemes() -> Vec<SchemeRecord> {
    vec![
        scheme(
            "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)",
            "Income support of ₹6,000 per year in three equal installments to small and marginal farmer families having combined landholding of up to 2 hectares.",
            SchemeCategory::Agriculture,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/pm-kisan",
        ),
        scheme(
            "Pradhan Mantri Fasal Bima Yojana",
            "Crop insurance scheme that provides comprehensive risk coverage from pre-sowing to post-harvest losses due to natural calamities.",
            SchemeCategory::Agriculture,
            "Season-based",
            "https://www.myscheme.gov.in/schemes/pmfby",
        ),
        scheme(
            "Per Drop More Crop",
            "Promotes water efficiency through precision irrigation and sustainable water management practices.",
            SchemeCategory::Agriculture,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/pdmc",
        ),
        scheme(
            "Soil Health Card Scheme",
            "Provides information on soil health to farmers to help them improve productivity through judicious use of inputs.",
            SchemeCategory::Agriculture,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/shc",
        ),
    ]
}

fn healthcare_schemes() -> Vec<SchemeRecord> {
    vec![
        scheme(
            "Ayushman Bharat - Pradhan Mantri Jan Arogya Yojana",
            "Health insurance coverage up to ₹5 lakh per family per year for secondary and tertiary care hospitalization.",
            SchemeCategory::Healthcare,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/ab-pmjay",
        ),
        scheme(
            "National Health Mission",
            "Provides accessible, affordable, and quality healthcare to rural and vulnerable populations.",
            SchemeCategory::Healthcare,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/nhm",
        ),
        scheme(
            "Janani Suraksha Yojana",
            "Safe motherhood intervention promoting institutional delivery among poor pregnant women.",
            SchemeCategory::Healthcare,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/jsy",
        ),
        scheme(
            "National AYUSH Mission",
            "Promotes AYUSH medical systems through cost-effective AYUSH services and medicines.",
            SchemeCategory::Healthcare,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/nam",
        ),
    ]
}

fn education_schemes() -> Vec<SchemeRecord> {
    vec![
        scheme(
            "Samagra Shiksha Abhiyan",
            "Integrated scheme for school education extending from pre-school to class 12 to ensure inclusive and equitable quality education.",
            SchemeCategory::Education,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/samagra-shiksha",
        ),
        scheme(
            "PM POSHAN Scheme",
            "Provides mid-day meals to improve nutritional levels among children and encourage poor children to attend school more regularly.",
            SchemeCategory::Education,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/pm-poshan",
        ),
        scheme(
            "Pradhan Mantri Vidya Lakshmi Karyakram",
            "Portal for students seeking education loans and scholarships for higher education in India and abroad.",
            SchemeCategory::Education,
            "Ongoing",
            "https://www.myscheme.gov.in/schemes/vidya-lakshmi",
        ),
        scheme(
            "National Means-cum-Merit Scholarship Scheme",
            "Scholarships for meritorious students from economically weaker sections to reduce dropouts at class VIII.",
            SchemeCategory::Education,
            "Annual",
            "https://www.myscheme.gov.in/schemes/nmmss",
        ),
    ]
}

fn scheme(
    title: &str,
    description: &str,
    category: SchemeCategory,
    deadline: &str,
    link: &str,
) -> SchemeRecord {
    SchemeRecord {
        title: title.into(),
        description: description.into(),
        category,
        deadline: deadline.into(),
        link: link.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_is_a_fixed_six_record_slice() {
        let set = fallback_schemes("all");
        assert_eq!(set.len(), 6);
        let categories: Vec<_> = set.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            [
                SchemeCategory::Agriculture,
                SchemeCategory::Agriculture,
                SchemeCategory::Healthcare,
                SchemeCategory::Healthcare,
                SchemeCategory::Education,
                SchemeCategory::Education,
            ]
        );
    }

    #[test]
    fn category_sets_are_tagged_and_nonempty() {
        for (name, expected) in [
            ("agriculture", SchemeCategory::Agriculture),
            ("healthcare", SchemeCategory::Healthcare),
            ("education", SchemeCategory::Education),
        ] {
            let set = fallback_schemes(name);
            assert!(!set.is_empty());
            assert!(set.iter().all(|r| r.category == expected));
        }
    }

    #[test]
    fn unknown_category_serves_agriculture() {
        let set = fallback_schemes("housing");
        assert!(set.iter().all(|r| r.category == SchemeCategory::Agriculture));
    }

    #[test]
    fn search_filter_matches_title_or_description() {
        let set = filter_by_search(fallback_schemes("agriculture"), "insurance");
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].title, "Pradhan Mantri Fasal Bima Yojana");
    }

    #[test]
    fn search_filter_may_legitimately_empty_the_set() {
        let set = filter_by_search(fallback_schemes("agriculture"), "spacecraft");
        assert!(set.is_empty());
    }
}

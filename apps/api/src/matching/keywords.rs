/// Course keyword expansion.
///
/// A student types a short course hint ("AI", "cs"); the catalog lists full
/// program names. The synonym table bridges the two. Lookups expect the
/// already-normalized course string (trimmed, lower-cased).
const COURSE_SYNONYMS: &[(&str, &[&str])] = &[
    ("ai", &["ai", "artificial intelligence", "machine learning"]),
    ("ml", &["machine learning", "ai"]),
    ("cs", &["computer science", "software engineering"]),
    ("data science", &["data science", "business analytics"]),
    ("mba", &["mba", "business analytics", "finance"]),
];

/// Expands a normalized course string into the keywords to match against
/// program lists. Unknown courses pass through as a single keyword.
pub fn expand_course(course: &str) -> Vec<String> {
    for (key, synonyms) in COURSE_SYNONYMS {
        if *key == course {
            return synonyms.iter().map(|s| s.to_string()).collect();
        }
    }
    vec![course.to_string()]
}

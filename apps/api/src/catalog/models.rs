use serde::{Deserialize, Serialize};

/// One row of the university catalog. Column order in the CSV:
/// name, country, city, ranking, programs, tuition, scholarship, website.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    /// Unique within a country; used as the shortlist selection key.
    pub name: String,
    pub country: String,
    pub city: String,
    /// Positive integer; lower is better.
    pub ranking: u32,
    /// Comma-joined list of offered program names.
    pub programs: String,
    /// Annual cost in USD.
    pub tuition: u32,
    /// One of "Very High" | "High" | "Medium" | "Low"; anything else is
    /// treated as an unknown tier by the scorer.
    pub scholarship: String,
    /// Display only, not validated.
    pub website: String,
}

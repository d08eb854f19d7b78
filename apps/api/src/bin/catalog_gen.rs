/// catalog-gen: builds data/universities.csv from the hipolabs university
/// directory, synthesizing the fields the directory does not carry.
///
/// Offline tool; run it once to (re)generate the catalog the API serves.
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const DIRECTORY_URL: &str = "http://universities.hipolabs.com/search";
const FETCH_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Countries fetched whole. The United States is queried separately by
/// keyword because the directory caps unfiltered result sets.
const COUNTRIES: &[&str] = &[
    "Canada",
    "United Kingdom",
    "Germany",
    "Australia",
    "France",
    "Netherlands",
    "Sweden",
    "Norway",
    "Denmark",
    "Finland",
    "Ireland",
    "Switzerland",
    "Italy",
    "Spain",
    "Singapore",
    "Japan",
    "South Korea",
    "New Zealand",
    "China",
    "India",
];

const US_KEYWORDS: &[&str] = &[
    "University",
    "College",
    "Institute",
    "California",
    "Texas",
    "New York",
    "Massachusetts",
    "Illinois",
    "Florida",
];

/// Annual tuition range in USD per country. Countries not listed use the
/// default range.
const TUITION_RANGES: &[(&str, (u32, u32))] = &[
    ("United States", (35_000, 70_000)),
    ("Canada", (20_000, 45_000)),
    ("United Kingdom", (25_000, 55_000)),
    ("Germany", (1_000, 15_000)),
    ("Australia", (25_000, 55_000)),
    ("India", (2_000, 12_000)),
];

const DEFAULT_TUITION_RANGE: (u32, u32) = (8_000, 30_000);

const SCHOLARSHIP_LEVELS: &[&str] = &["Very High", "High", "Medium", "Low"];

const PROGRAMS_POOL: &[&str] = &[
    "MS Computer Science",
    "Artificial Intelligence",
    "Data Science",
    "MBA",
    "Cybersecurity",
    "Robotics",
    "Business Analytics",
    "Software Engineering",
];

const CITY_SAMPLES: &[(&str, &[&str])] = &[
    (
        "United States",
        &["New York", "Boston", "California", "Chicago", "Texas"],
    ),
    ("Canada", &["Toronto", "Vancouver"]),
    ("United Kingdom", &["London", "Manchester"]),
    ("Germany", &["Berlin", "Munich"]),
    ("Australia", &["Sydney", "Melbourne"]),
    ("India", &["Delhi", "Mumbai", "Bangalore"]),
];

#[derive(Parser, Debug)]
#[command(name = "catalog-gen", about = "Generate the university catalog CSV")]
struct Args {
    /// Where to write the catalog.
    #[arg(long, default_value = "data/universities.csv")]
    output: PathBuf,

    /// Directory rows taken per non-US country.
    #[arg(long, default_value_t = 100)]
    per_country: usize,

    /// Directory rows taken per US keyword search.
    #[arg(long, default_value_t = 150)]
    per_us_keyword: usize,
}

/// One row of the hipolabs directory response.
#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    name: String,
    #[serde(default)]
    web_pages: Vec<String>,
}

/// One row of the generated catalog, matching the API's expected schema.
#[derive(Debug, Serialize)]
struct CatalogRow {
    name: String,
    country: String,
    city: String,
    ranking: u32,
    programs: String,
    tuition: u32,
    scholarship: String,
    website: String,
}

fn tuition_range(country: &str) -> (u32, u32) {
    TUITION_RANGES
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, range)| *range)
        .unwrap_or(DEFAULT_TUITION_RANGE)
}

fn pick_city(country: &str, rng: &mut impl Rng) -> String {
    CITY_SAMPLES
        .iter()
        .find(|(c, _)| *c == country)
        .and_then(|(_, cities)| cities.choose(rng))
        .unwrap_or(&"Main City")
        .to_string()
}

fn pick_programs(rng: &mut impl Rng) -> String {
    PROGRAMS_POOL
        .choose_multiple(rng, 3)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

fn synthesize_row(entry: &DirectoryEntry, country: &str, rng: &mut impl Rng) -> CatalogRow {
    let (min_fee, max_fee) = tuition_range(country);
    CatalogRow {
        name: entry.name.clone(),
        country: country.to_string(),
        city: pick_city(country, rng),
        ranking: rng.gen_range(1..=500),
        programs: pick_programs(rng),
        tuition: rng.gen_range(min_fee..=max_fee),
        scholarship: SCHOLARSHIP_LEVELS
            .choose(rng)
            .copied()
            .unwrap_or("Medium")
            .to_string(),
        website: entry.web_pages.first().cloned().unwrap_or_default(),
    }
}

/// Fetches one directory query, retrying on any failure. An exhausted query
/// yields an empty list so a flaky country never aborts the whole run.
async fn fetch_with_retry(
    client: &reqwest::Client,
    params: &[(&str, &str)],
) -> Vec<DirectoryEntry> {
    for attempt in 1..=FETCH_RETRIES {
        let result = client.get(DIRECTORY_URL).query(params).send().await;
        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<Vec<DirectoryEntry>>().await {
                    Ok(entries) => return entries,
                    Err(e) => warn!("Directory response parse failed: {e}"),
                }
            }
            Ok(response) => warn!("Directory returned {}", response.status()),
            Err(e) => warn!("Directory request failed: {e}"),
        }
        if attempt < FETCH_RETRIES {
            tokio::time::sleep(RETRY_DELAY).await;
        }
    }
    warn!("Giving up on query {params:?}");
    Vec::new()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .context("Failed to build HTTP client")?;
    let mut rng = rand::thread_rng();
    let mut rows: Vec<CatalogRow> = Vec::new();

    info!("Fetching non-US universities...");
    for &country in COUNTRIES {
        let entries = fetch_with_retry(&client, &[("country", country)]).await;
        let taken = entries.len().min(args.per_country);
        for entry in &entries[..taken] {
            rows.push(synthesize_row(entry, country, &mut rng));
        }
        info!("{country}: {taken} universities");
    }

    info!("Fetching US universities by keyword...");
    let mut us_seen: HashSet<String> = HashSet::new();
    for &keyword in US_KEYWORDS {
        let entries = fetch_with_retry(
            &client,
            &[("country", "United States"), ("name", keyword)],
        )
        .await;
        let mut added = 0;
        for entry in entries.iter().take(args.per_us_keyword) {
            if !us_seen.insert(entry.name.clone()) {
                continue;
            }
            rows.push(synthesize_row(entry, "United States", &mut rng));
            added += 1;
        }
        info!("US keyword '{keyword}': {added} new universities");
        // Pace keyword queries so the directory does not throttle us.
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to open {} for writing", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Wrote {} universities to {}", rows.len(), args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuition_range_known_and_default() {
        assert_eq!(tuition_range("Germany"), (1_000, 15_000));
        assert_eq!(tuition_range("France"), DEFAULT_TUITION_RANGE);
    }

    #[test]
    fn test_city_falls_back_for_unlisted_country() {
        let mut rng = rand::thread_rng();
        assert_eq!(pick_city("France", &mut rng), "Main City");
    }

    #[test]
    fn test_programs_are_three_distinct_entries() {
        let mut rng = rand::thread_rng();
        let programs = pick_programs(&mut rng);
        let parts: Vec<&str> = programs.split(", ").collect();
        assert_eq!(parts.len(), 3);
        let unique: HashSet<&str> = parts.iter().copied().collect();
        assert_eq!(unique.len(), 3);
        for part in parts {
            assert!(PROGRAMS_POOL.contains(&part), "unknown program {part}");
        }
    }

    #[test]
    fn test_synthesized_row_within_bounds() {
        let mut rng = rand::thread_rng();
        let entry = DirectoryEntry {
            name: "TU Berlin".to_string(),
            web_pages: vec!["https://tu.berlin".to_string()],
        };
        let row = synthesize_row(&entry, "Germany", &mut rng);
        assert_eq!(row.country, "Germany");
        assert!((1..=500).contains(&row.ranking));
        assert!((1_000..=15_000).contains(&row.tuition));
        assert!(SCHOLARSHIP_LEVELS.contains(&row.scholarship.as_str()));
        assert_eq!(row.website, "https://tu.berlin");
    }

    #[test]
    fn test_missing_web_pages_yields_empty_website() {
        let mut rng = rand::thread_rng();
        let entry = DirectoryEntry {
            name: "No Site U".to_string(),
            web_pages: Vec::new(),
        };
        let row = synthesize_row(&entry, "Canada", &mut rng);
        assert_eq!(row.website, "");
    }
}

use serde::Serialize;

use crate::catalog::{Catalog, Institution};
use crate::matching::{keywords, score};
use crate::models::profile::StudentProfile;

/// Shortlist page size. The pipeline never returns more than this many rows.
const MAX_RESULTS: usize = 10;

/// One institution with its computed match score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub institution: Institution,
    pub score: u32,
}

/// The result of a matching run. `fallback` is set when the course filter
/// eliminated every candidate and the country set was used instead.
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<ScoredMatch>,
    pub fallback: bool,
}

/// Runs the matching pipeline: country filter, course keyword filter with
/// country fallback, rank sort, cap, score.
///
/// The sort is stable and ascending by ranking, so institutions with equal
/// rank keep their catalog order.
pub fn find_matches(profile: &StudentProfile, catalog: &Catalog) -> MatchOutcome {
    let by_country: Vec<&Institution> = catalog
        .institutions()
        .iter()
        .filter(|i| i.country == profile.country)
        .collect();

    let course = profile.normalized_course();
    let (mut survivors, fallback) = if course.is_empty() {
        (by_country, false)
    } else {
        let keywords = keywords::expand_course(&course);
        let by_course: Vec<&Institution> = by_country
            .iter()
            .copied()
            .filter(|i| {
                let programs = i.programs.to_lowercase();
                keywords.iter().any(|kw| programs.contains(kw.as_str()))
            })
            .collect();
        if by_course.is_empty() {
            (by_country, true)
        } else {
            (by_course, false)
        }
    };

    survivors.sort_by_key(|i| i.ranking);
    survivors.truncate(MAX_RESULTS);

    let ceiling = profile.budget.ceiling();
    let matches = survivors
        .into_iter()
        .map(|i| ScoredMatch {
            score: score::compute_score(profile.cgpa, ceiling, i),
            institution: i.clone(),
        })
        .collect();

    MatchOutcome { matches, fallback }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::BudgetBand;
    use std::io::Write;

    fn catalog(rows: &[&str]) -> Catalog {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "name,country,city,ranking,programs,tuition,scholarship,website").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        Catalog::load(file.path()).expect("catalog")
    }

    fn profile(country: &str, course: &str) -> StudentProfile {
        StudentProfile {
            name: "Asha".to_string(),
            cgpa: 8.5,
            country: country.to_string(),
            budget: BudgetBand::UpTo40k,
            course: course.to_string(),
        }
    }

    #[test]
    fn test_only_requested_country_survives() {
        let catalog = catalog(&[
            "TU Berlin,Germany,Berlin,120,Computer Science,3500,High,https://tu.berlin",
            "U Toronto,Canada,Toronto,30,Computer Science,25000,Medium,https://ut.ca",
        ]);
        let outcome = find_matches(&profile("Germany", ""), &catalog);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].institution.name, "TU Berlin");
        assert!(!outcome.fallback);
    }

    #[test]
    fn test_results_sorted_by_ranking_and_capped() {
        let rows: Vec<String> = (0..15)
            .map(|n| {
                format!(
                    "U{n},Germany,Berlin,{rank},Computer Science,3500,High,https://u{n}.de",
                    rank = 200 - n
                )
            })
            .collect();
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let catalog = catalog(&row_refs);

        let outcome = find_matches(&profile("Germany", "cs"), &catalog);
        assert_eq!(outcome.matches.len(), 10);
        let rankings: Vec<u32> = outcome
            .matches
            .iter()
            .map(|m| m.institution.ranking)
            .collect();
        let mut sorted = rankings.clone();
        sorted.sort();
        assert_eq!(rankings, sorted);
        assert_eq!(outcome.matches[0].institution.ranking, 186);
    }

    #[test]
    fn test_equal_rankings_keep_catalog_order() {
        let catalog = catalog(&[
            "First,Germany,Berlin,50,Computer Science,3500,High,https://a.de",
            "Second,Germany,Munich,50,Computer Science,4000,Low,https://b.de",
        ]);
        let outcome = find_matches(&profile("Germany", ""), &catalog);
        assert_eq!(outcome.matches[0].institution.name, "First");
        assert_eq!(outcome.matches[1].institution.name, "Second");
    }

    #[test]
    fn test_course_filter_matches_case_insensitively_via_synonyms() {
        let catalog = catalog(&[
            "TU Berlin,Germany,Berlin,120,\"Artificial Intelligence, Robotics\",3500,High,https://tu.berlin",
            "LMU Munich,Germany,Munich,80,\"Finance, MBA\",4000,Medium,https://lmu.de",
        ]);
        // Profile course is raw user input; normalization happens inside.
        let outcome = find_matches(&profile("Germany", " AI "), &catalog);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].institution.name, "TU Berlin");
        assert!(!outcome.fallback);
    }

    #[test]
    fn test_empty_course_skips_the_filter() {
        let catalog = catalog(&[
            "TU Berlin,Germany,Berlin,120,Robotics,3500,High,https://tu.berlin",
            "LMU Munich,Germany,Munich,80,Finance,4000,Medium,https://lmu.de",
        ]);
        let outcome = find_matches(&profile("Germany", "   "), &catalog);
        assert_eq!(outcome.matches.len(), 2);
        assert!(!outcome.fallback);
    }

    #[test]
    fn test_course_wipeout_falls_back_to_country_set() {
        let catalog = catalog(&[
            "TU Berlin,Germany,Berlin,120,Robotics,3500,High,https://tu.berlin",
            "LMU Munich,Germany,Munich,80,Finance,4000,Medium,https://lmu.de",
        ]);
        let outcome = find_matches(&profile("Germany", "data science"), &catalog);
        assert!(outcome.fallback);
        let names: Vec<&str> = outcome
            .matches
            .iter()
            .map(|m| m.institution.name.as_str())
            .collect();
        assert_eq!(names, vec!["LMU Munich", "TU Berlin"]);
    }

    #[test]
    fn test_unknown_country_yields_empty_non_fallback() {
        let catalog = catalog(&[
            "TU Berlin,Germany,Berlin,120,Computer Science,3500,High,https://tu.berlin",
        ]);
        let outcome = find_matches(&profile("Atlantis", "cs"), &catalog);
        assert!(outcome.matches.is_empty());
        assert!(!outcome.fallback);
    }

    #[test]
    fn test_scores_attached_from_profile_and_institution() {
        let catalog = catalog(&[
            "TU Berlin,Germany,Berlin,120,Computer Science,3500,Very High,https://tu.berlin",
        ]);
        let mut p = profile("Germany", "cs");
        p.cgpa = 9.5;
        let outcome = find_matches(&p, &catalog);
        assert_eq!(outcome.matches[0].score, 100);
    }
}

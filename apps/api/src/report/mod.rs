// Counseling report: section rendering, pagination, and the download handler.

pub mod handlers;
pub mod pagination;
pub mod sections;

use chrono::{DateTime, Utc};

use crate::session::models::Session;
use pagination::{paginate, PageConfig};
use sections::ReportSection;

const REPORT_TITLE: &str = "STUDY ABROAD COUNSELING REPORT";

/// Assembles the full plain-text report for one session.
///
/// `generated_at` is passed in rather than read from the clock so the
/// document is reproducible.
pub fn render_report(session: &Session, generated_at: DateTime<Utc>, config: PageConfig) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        String::new(),
    ];

    for section in ReportSection::ALL {
        lines.push(section.title().to_string());
        lines.push("-".repeat(section.title().len()));
        lines.extend(section.render(session));
        lines.push(String::new());
    }

    let pages = paginate(&lines, config);
    let total = pages.len();

    pages
        .into_iter()
        .map(|page| {
            format!(
                "{}\n\n-- Page {} of {} --",
                page.lines.join("\n"),
                page.number,
                total
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{BudgetBand, StudentProfile};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn session() -> Session {
        let mut session = Session::new(Uuid::new_v4());
        session.profile = Some(StudentProfile {
            name: "Asha".to_string(),
            cgpa: 8.5,
            country: "Germany".to_string(),
            budget: BudgetBand::UpTo40k,
            course: "AI".to_string(),
        });
        session.shortlist.add("TU Berlin".to_string());
        session
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_report_contains_every_section_title() {
        let report = render_report(&session(), timestamp(), PageConfig::default());
        for section in ReportSection::ALL {
            assert!(report.contains(section.title()), "missing {}", section.title());
        }
    }

    #[test]
    fn test_report_is_deterministic_for_fixed_timestamp() {
        let session = session();
        let a = render_report(&session, timestamp(), PageConfig::default());
        let b = render_report(&session, timestamp(), PageConfig::default());
        assert_eq!(a, b);
        assert!(a.contains("Generated: 2024-05-01 12:00 UTC"));
    }

    #[test]
    fn test_short_report_is_one_page() {
        let report = render_report(&session(), timestamp(), PageConfig::default());
        assert!(report.contains("-- Page 1 of 1 --"));
        assert!(!report.contains("-- Page 2"));
    }

    #[test]
    fn test_long_feedback_spills_onto_more_pages() {
        let mut session = session();
        let long_feedback: Vec<String> = (0..80).map(|n| format!("point {n}")).collect();
        session.sop_feedback = Some(long_feedback.join("\n"));
        let report = render_report(&session, timestamp(), PageConfig::default());
        assert!(report.contains("-- Page 1 of 3 --"));
        assert!(report.contains("-- Page 3 of 3 --"));
    }
}

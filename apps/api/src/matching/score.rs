use crate::catalog::Institution;

/// Points awarded per scholarship availability tier. Tiers not listed here
/// score the default.
const SCHOLARSHIP_SCORES: &[(&str, u32)] = &[
    ("Very High", 30),
    ("High", 25),
    ("Medium", 15),
    ("Low", 5),
];

const SCHOLARSHIP_DEFAULT: u32 = 10;

/// Computes the 0-100 match score for one institution.
///
/// Three additive components: academic standing from CGPA, affordability
/// against the budget ceiling, and scholarship availability. The sum is
/// clamped to 100.
pub fn compute_score(cgpa: f64, budget_ceiling: u32, institution: &Institution) -> u32 {
    let mut score = 0;

    score += if cgpa >= 9.0 {
        40
    } else if cgpa >= 8.0 {
        30
    } else if cgpa >= 7.0 {
        20
    } else {
        10
    };

    if institution.tuition <= budget_ceiling {
        score += 30;
    } else {
        score += 15;
    }

    score += SCHOLARSHIP_SCORES
        .iter()
        .find(|(tier, _)| *tier == institution.scholarship)
        .map(|(_, points)| *points)
        .unwrap_or(SCHOLARSHIP_DEFAULT);

    score.min(100)
}

use serde::{Deserialize, Serialize};

/// Annual budget band chosen during onboarding. The six labels are fixed;
/// anything else is rejected at the profile boundary by serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetBand {
    #[serde(rename = "< $15k")]
    Under15k,
    #[serde(rename = "$15k-25k")]
    UpTo25k,
    #[serde(rename = "$25k-40k")]
    UpTo40k,
    #[serde(rename = "$40k-60k")]
    UpTo60k,
    #[serde(rename = "$60k-80k")]
    UpTo80k,
    #[serde(rename = "$80k+")]
    Above80k,
}

impl BudgetBand {
    /// Numeric tuition ceiling in USD used by the affordability component.
    pub fn ceiling(self) -> u32 {
        match self {
            BudgetBand::Under15k => 15_000,
            BudgetBand::UpTo25k => 25_000,
            BudgetBand::UpTo40k => 40_000,
            BudgetBand::UpTo60k => 60_000,
            BudgetBand::UpTo80k => 80_000,
            BudgetBand::Above80k => 120_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetBand::Under15k => "< $15k",
            BudgetBand::UpTo25k => "$15k-25k",
            BudgetBand::UpTo40k => "$25k-40k",
            BudgetBand::UpTo60k => "$40k-60k",
            BudgetBand::UpTo80k => "$60k-80k",
            BudgetBand::Above80k => "$80k+",
        }
    }
}

impl std::fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The student profile saved during onboarding. Matching, chat, and report
/// rendering all require a saved profile; handlers reject requests for
/// sessions without one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Display only; not used for matching.
    #[serde(default)]
    pub name: String,
    pub cgpa: f64,
    /// Must match a canonical catalog country for non-fallback results.
    pub country: String,
    pub budget: BudgetBand,
    /// Free text; lower-cased and trimmed before matching. May be empty,
    /// in which case the course filter is skipped.
    #[serde(default)]
    pub course: String,
}

impl StudentProfile {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=10.0).contains(&self.cgpa) {
            return Err(format!("cgpa must be within [0, 10], got {}", self.cgpa));
        }
        if self.country.trim().is_empty() {
            return Err("country must not be empty".to_string());
        }
        Ok(())
    }

    /// Course string as the Matcher consumes it.
    pub fn normalized_course(&self) -> String {
        self.course.trim().to_lowercase()
    }
}

use crate::models::profile::StudentProfile;

/// Prompt for one counseling turn. The assistant answers from the profile
/// and shortlist only; it never sees earlier turns.
const CHAT_PROMPT: &str = "Student profile:
{profile}

Shortlisted universities:
{shortlist}

Student question: {question}";

pub fn build_chat_prompt(
    profile: &StudentProfile,
    shortlist: &[String],
    question: &str,
) -> String {
    let profile_block = format!(
        "- Name: {}\n- CGPA: {}\n- Target country: {}\n- Budget: {} per year\n- Course interest: {}",
        if profile.name.trim().is_empty() {
            "(not given)"
        } else {
            profile.name.trim()
        },
        profile.cgpa,
        profile.country,
        profile.budget,
        if profile.course.trim().is_empty() {
            "(none)"
        } else {
            profile.course.trim()
        },
    );

    let shortlist_block = if shortlist.is_empty() {
        "(none yet)".to_string()
    } else {
        shortlist
            .iter()
            .map(|name| format!("- {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    CHAT_PROMPT
        .replace("{profile}", &profile_block)
        .replace("{shortlist}", &shortlist_block)
        .replace("{question}", question)
}

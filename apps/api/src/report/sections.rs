use crate::session::models::{ChatRole, Session};

/// The fixed sections of the counseling report, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    Profile,
    Shortlist,
    Feedback,
    Conversation,
}

impl ReportSection {
    pub const ALL: [ReportSection; 4] = [
        ReportSection::Profile,
        ReportSection::Shortlist,
        ReportSection::Feedback,
        ReportSection::Conversation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportSection::Profile => "1. Student Profile",
            ReportSection::Shortlist => "2. Shortlisted Universities",
            ReportSection::Feedback => "3. SOP / Resume Feedback",
            ReportSection::Conversation => "4. Counseling Conversation",
        }
    }

    /// Renders the section body as unwrapped lines. Empty state is spelled
    /// out in prose so the report never has a silently blank section.
    pub fn render(self, session: &Session) -> Vec<String> {
        match self {
            ReportSection::Profile => match &session.profile {
                Some(profile) => vec![
                    format!("Name: {}", if profile.name.trim().is_empty() {
                        "(not given)"
                    } else {
                        profile.name.trim()
                    }),
                    format!("CGPA: {}", profile.cgpa),
                    format!("Target country: {}", profile.country),
                    format!("Budget: {} per year", profile.budget),
                    format!(
                        "Course interest: {}",
                        if profile.course.trim().is_empty() {
                            "(none)"
                        } else {
                            profile.course.trim()
                        }
                    ),
                ],
                None => vec!["No profile saved.".to_string()],
            },
            ReportSection::Shortlist => {
                if session.shortlist.is_empty() {
                    vec!["No universities shortlisted.".to_string()]
                } else {
                    session
                        .shortlist
                        .names()
                        .iter()
                        .enumerate()
                        .map(|(idx, name)| format!("{}. {}", idx + 1, name))
                        .collect()
                }
            }
            ReportSection::Feedback => match &session.sop_feedback {
                Some(feedback) => feedback.lines().map(str::to_string).collect(),
                None => vec!["No document reviewed.".to_string()],
            },
            ReportSection::Conversation => {
                if session.chat_history.is_empty() {
                    vec!["No conversation recorded.".to_string()]
                } else {
                    session
                        .chat_history
                        .iter()
                        .map(|turn| {
                            let speaker = match turn.role {
                                ChatRole::Student => "Student",
                                ChatRole::Advisor => "Advisor",
                            };
                            format!("{speaker}: {}", turn.text)
                        })
                        .collect()
                }
            }
        }
    }
}

/// Prompt for the SOP/resume feedback call.
///
/// The four numbered headings are part of the product contract; the frontend
/// splits the feedback on them.
const REVIEW_PROMPT: &str = "Review the following statement of purpose or resume \
for a study-abroad application.

Give feedback under exactly these headings:
1. Key Strengths
2. Weaknesses / Missing Areas
3. Improvements
4. Rewrite Suggestions (for the weakest sentences)

Be specific and actionable. Do NOT repeat the document back.

Document:
{document}";

pub fn build_review_prompt(document: &str) -> String {
    REVIEW_PROMPT.replace("{document}", document)
}

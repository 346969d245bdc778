// Prompt template for job description generation.
// Values are interpolated verbatim: no escaping, no truncation.

use crate::generation::generator::JobRequest;

pub const ABOUT_HEADING: &str = "About the Job";
pub const SKILLS_HEADING: &str = "Required Skills";
pub const BENEFITS_HEADING: &str = "Featured Benefits";

/// Builds the single instruction sent to the text generator.
///
/// Caller text that looks like a placeholder (e.g. `{key_focus}`) is left untouched.
pub fn build_job_description_prompt(request: &JobRequest) -> String {
    format!(
        r#"
Generate a detailed and professional job description for a **{title}** role at a U.S.-based tech company. Use a tone that is clear, structured, and appealing to experienced professionals. Do not add skills that are not mentioned.
Follow this structure precisely:

1. **{about}**
   - Start with a 2–3 sentence overview of the role, including the team or department context.
   - Then include this custom note: "{note}"
   - Highlight key responsibilities, tools, or impact areas in 3–5 bullet points.

2. **{skills}**
   - List 10–12 specific technical and soft skills related to **{focus}**.
   - Include tools, technologies, methodologies, and relevant interpersonal skills.
   - Use bullet points for clarity.

3. **{benefits_heading}** section: Include the following benefits as bullet points:
{benefits}

Use section headings: "{about}", "{skills}", and "{benefits_heading}". Keep the tone professional, structured, and suitable for a U.S.-based tech company.
"#,
        title = request.job_title,
        note = request.custom_note,
        focus = request.key_focus,
        benefits = request.benefits,
        about = ABOUT_HEADING,
        skills = SKILLS_HEADING,
        benefits_heading = BENEFITS_HEADING,
    )
}

// Cross-cutting prompt fragments shared by every output format.
// Format-specific templates live in tailoring::prompts.

/// Appended to every generation prompt. The model still ignores this now and
/// then, which is what `tailoring::sanitize` cleans up after.
pub const NO_FENCES_INSTRUCTION: &str =
    "Output ONLY the requested document content. Do NOT wrap it in markdown code fences \
    and do NOT add explanations before or after it.";

/// Content rules shared by all formats.
pub const CONTENT_GUIDELINES: &str = "\
**Content Guidelines:**
- Highlight the skills and experience most relevant to the job description.
- Use strong action verbs.
- Keep it concise with high information density.
- Do NOT invent employers, dates, degrees or metrics that are not in the resume text.";

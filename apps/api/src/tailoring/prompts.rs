// Prompt templates for each output format, plus the composer that fills them.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{CONTENT_GUIDELINES, NO_FENCES_INSTRUCTION};
use crate::tailoring::format::OutputFormat;

/// Fixed text around the user's values. The résumé and job description are
/// spliced in between `preamble` and `instructions`.
#[derive(Debug)]
pub struct PromptTemplate {
    pub preamble: &'static str,
    pub instructions: &'static str,
}

pub static HTML_INLINE_TEMPLATE: PromptTemplate = PromptTemplate {
    preamble: "You are an expert resume writer and HTML specialist.",
    instructions: r#"Please rewrite the resume to better match the job description and output it as HTML content.

**CRITICAL REQUIREMENTS:**
1. **NO GLOBAL STYLES**: Do NOT use <style> tags, <link> tags, or any global CSS. Use ONLY inline styles.
2. **NO WRAPPER TAGS**: Do NOT include <html>, <head>, or <body> tags. Output only the content divs.
3. **Color Scheme**: Use white text (color: #ffffff or #ededed) on a transparent/dark background.
4. **Font**: Use font-family: 'Times New Roman', Times, serif; font-size: 11pt; line-height: 1.6;

**Specific Styling (ALL INLINE):**
- **Header Name**: style="text-align: center; font-size: 24pt; margin-bottom: 5px; font-weight: normal; color: #ffffff;"
- **Contact Info**: style="text-align: center; font-size: 10pt; margin-bottom: 15px; color: #ededed;"
- **Section Headings**: style="text-transform: uppercase; border-bottom: 1px solid #ffffff; font-size: 12pt; font-weight: bold; margin-top: 15px; margin-bottom: 8px; padding-bottom: 2px; color: #ffffff;"
- **Body Text**: style="color: #ededed; margin-bottom: 8px;"
- **Experience Items**: Use flexbox for title/date: style="display: flex; justify-content: space-between; align-items: baseline; color: #ffffff; margin-bottom: 5px;"
- **Lists**: style="margin-top: 2px; margin-bottom: 8px; padding-left: 20px; color: #ededed;"
- **List Items**: style="margin-bottom: 2px; color: #ededed;""#,
};

pub static HTML_DOCUMENT_TEMPLATE: PromptTemplate = PromptTemplate {
    preamble: "You are an expert resume writer and web designer producing print-ready resumes.",
    instructions: r#"Please rewrite the resume to better match the job description and output it as a complete HTML document.

**CRITICAL REQUIREMENTS:**
1. Output a full document starting with <!DOCTYPE html>, including <html>, <head> and <body>.
2. Put all styling in a single <style> block inside <head>. No external stylesheets, fonts or scripts.
3. Target US Letter paper: @page { size: letter; margin: 0.6in; } and keep the resume to one page where possible.
4. **Font**: font-family: 'Times New Roman', Times, serif; font-size: 11pt; line-height: 1.5; black text on white.

**Layout:**
- Centered name (22pt) with contact details on one line beneath it (10pt).
- Uppercase section headings with a thin bottom border.
- Experience entries with title/company on the left and dates right-aligned on the same line.
- Bulleted achievements under each entry."#,
};

pub static LATEX_TEMPLATE: PromptTemplate = PromptTemplate {
    preamble: "You are an expert resume writer and LaTeX typesetter.",
    instructions: r#"Please rewrite the resume to better match the job description and output it as a LaTeX document.

**CRITICAL REQUIREMENTS:**
1. Output a complete, compilable document from \documentclass to \end{document}.
2. Use \documentclass[11pt,letterpaper]{article} with only standard packages (geometry, enumitem, titlesec, hyperref).
3. Margins: \usepackage[margin=0.6in]{geometry}. Keep the resume to one page where possible.
4. Escape LaTeX special characters (&, %, $, #, _, {, }) that appear in resume content.

**Layout:**
- Centered name in \Large bold with contact details on one line beneath it.
- Section headings via \section* styled with titlesec, followed by a horizontal rule.
- Experience entries with title/company on the left and dates flushed right using \hfill.
- Achievements as compact itemize lists (\setlist{nosep})."#,
};

/// Builds the generation prompt for `format`.
///
/// User values are inserted verbatim in one pass, so braces or
/// placeholder-looking text inside them is left alone.
pub fn compose_prompt(format: OutputFormat, resume_text: &str, job_description: &str) -> String {
    let template = format.template();
    format!(
        "{preamble}\n\n\
         Here is a candidate's resume text:\n\"{resume_text}\"\n\n\
         Here is the job description they are applying for:\n\"{job_description}\"\n\n\
         {instructions}\n\n\
         {CONTENT_GUIDELINES}\n\n\
         {NO_FENCES_INSTRUCTION}",
        preamble = template.preamble,
        instructions = template.instructions,
    )
}

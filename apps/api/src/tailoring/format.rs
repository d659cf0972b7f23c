//! Output formats a deployment can generate.
//!
//! Each format owns its prompt template and the fence tags the model tends to
//! wrap its answer in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tailoring::prompts::{
    PromptTemplate, HTML_DOCUMENT_TEMPLATE, HTML_INLINE_TEMPLATE, LATEX_TEMPLATE,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML fragment with inline styles only, dark theme.
    #[default]
    HtmlInline,
    /// Complete printable HTML page with an embedded stylesheet.
    HtmlDocument,
    /// Standalone LaTeX document.
    Latex,
}

#[derive(Debug, Error)]
#[error("unknown output format '{0}'")]
pub struct UnknownOutputFormat(pub String);

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::HtmlInline,
        OutputFormat::HtmlDocument,
        OutputFormat::Latex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::HtmlInline => "html-inline",
            OutputFormat::HtmlDocument => "html-document",
            OutputFormat::Latex => "latex",
        }
    }

    pub fn template(&self) -> &'static PromptTemplate {
        match self {
            OutputFormat::HtmlInline => &HTML_INLINE_TEMPLATE,
            OutputFormat::HtmlDocument => &HTML_DOCUMENT_TEMPLATE,
            OutputFormat::Latex => &LATEX_TEMPLATE,
        }
    }

    /// Info-string tags accepted on an opening fence, longest first.
    pub fn fence_tags(&self) -> &'static [&'static str] {
        match self {
            OutputFormat::HtmlInline | OutputFormat::HtmlDocument => &["html"],
            OutputFormat::Latex => &["latex", "tex"],
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOutputFormat(s.to_string()))
    }
}

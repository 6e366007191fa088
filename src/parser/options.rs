use crate::parser::error::MalformedReportError;
use crate::parser::metar::assemble_metar;
use crate::parser::taf::assemble_taf;
use crate::parser::tokenizer::{sanitise, tokenize};
use crate::types::metar::Metar;
use crate::types::taf::Taf;
use bon::Builder;
use std::borrow::Cow;

/// Parser settings.
///
/// ```
/// use metar_taf::ParseOptions;
///
/// let options = ParseOptions::builder().strict(true).build();
/// assert!(options.strict());
/// assert!(options.sanitise());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct ParseOptions {
    /// Fail on groups that cannot be decoded instead of keeping them as
    /// remarks.
    #[builder(default = false)]
    strict: bool,
    /// Collapse whitespace and strip the trailing `=` before tokenizing.
    #[builder(default = true)]
    sanitise: bool,
}

impl ParseOptions {
    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn sanitise(&self) -> bool {
        self.sanitise
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Parses reports with a fixed set of [`ParseOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportParser {
    options: ParseOptions,
}

impl ReportParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn metar(&self, text: &str) -> Result<Metar, MalformedReportError> {
        let text = self.prepare(text);
        let tokens = tokenize(&text)?;
        assemble_metar(&tokens, self.options.strict)
    }

    pub fn taf(&self, text: &str) -> Result<Taf, MalformedReportError> {
        let text = self.prepare(text);
        let tokens = tokenize(&text)?;
        assemble_taf(&tokens, self.options.strict)
    }

    fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.options.sanitise {
            Cow::Owned(sanitise(text))
        } else {
            Cow::Borrowed(text)
        }
    }
}

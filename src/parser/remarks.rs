use crate::parser::error::MalformedReportError;
use crate::parser::tokenizer::RawGroup;
use log::debug;

/// Collects groups that end up in a report's free-text remarks.
pub(crate) struct Remarks<'a> {
    strict: bool,
    parts: Vec<&'a str>,
}

impl<'a> Remarks<'a> {
    pub(crate) fn new(strict: bool) -> Self {
        Self {
            strict,
            parts: Vec::new(),
        }
    }

    /// Keeps a group that could not be used; fatal in strict mode.
    pub(crate) fn unrecognised(
        &mut self,
        group: &RawGroup<'a>,
        reason: &dyn std::fmt::Display,
    ) -> Result<(), MalformedReportError> {
        if self.strict {
            return Err(MalformedReportError::UnrecognisedGroup {
                text: group.text().to_string(),
                offset: group.offset(),
            });
        }
        debug!("Keeping group '{}' as remark: {}", group.text(), reason);
        self.parts.push(group.text());
        Ok(())
    }

    /// Appends the verbatim text following `RMK`.
    pub(crate) fn free_text(&mut self, text: &'a str) {
        if !text.is_empty() {
            self.parts.push(text);
        }
    }

    pub(crate) fn finish(self) -> Option<String> {
        (!self.parts.is_empty()).then(|| self.parts.join(" "))
    }
}

use thiserror::Error;

/// A report that cannot be decoded at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReportError {
    #[error("Report is empty")]
    Empty,

    #[error("Missing or invalid station identifier (found '{0}')")]
    MissingStation(String),

    #[error("Missing observation or issuance time")]
    MissingTime,

    #[error("Invalid time '{text}' at offset {offset}")]
    InvalidTime { text: String, offset: usize },

    #[error("Missing validity period after issuance time")]
    MissingValidity,

    #[error("Invalid validity interval '{text}' at offset {offset}")]
    InvalidInterval { text: String, offset: usize },

    #[error("Report does not start with 'TAF' (found '{0}')")]
    NotATaf(String),

    #[error("Unrecognised group '{text}' at offset {offset}")]
    UnrecognisedGroup { text: String, offset: usize },
}

/// A single group that could not be decoded. The report parse continues and
/// the group is kept in the remarks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupDecodeError {
    #[error("Group '{0}' matches no known group format")]
    Unrecognised(String),

    #[error("Group '{group}' is out of range: {reason}")]
    OutOfRange { group: String, reason: &'static str },
}

impl GroupDecodeError {
    pub(crate) fn out_of_range(group: &str, reason: &'static str) -> Self {
        GroupDecodeError::OutOfRange {
            group: group.to_string(),
            reason,
        }
    }
}

use thiserror::Error;

/// Reasons a semester label fails validation.
///
/// Labels have the shape `YYYY-T` where `T` is `1` or `2`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemesterError {
    #[error("Semester '{0}' must have the form YYYY-1 or YYYY-2")]
    InvalidFormat(String),

    #[error("Semester '{0}' has a term other than 1 or 2")]
    InvalidTerm(String),

    #[error("Semester '{0}' does not start with a valid year")]
    InvalidYear(String),

    /// The configured calendar does not cover the given month.
    #[error("No semester covers the date {0}")]
    Undetermined(chrono::NaiveDate),
}

//! Semester calculator.
//!
//! A semester label has the shape `YYYY-T`. The second semester may wrap the year
//! boundary (September to February by default), in which case the months after New
//! Year belong to the previous year's second semester.

use chrono::Datelike;

use crate::server::error::semester::SemesterError;

/// Month ranges (inclusive, `1..=12`) of the two semesters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterConfig {
    pub first_start: u32,
    pub first_end: u32,
    pub second_start: u32,
    pub second_end: u32,
}

impl Default for SemesterConfig {
    /// March to August, then September to February.
    fn default() -> Self {
        Self {
            first_start: 3,
            first_end: 8,
            second_start: 9,
            second_end: 2,
        }
    }
}

impl SemesterConfig {
    /// Returns the semester label covering `date`.
    ///
    /// The second-semester range is checked first: a month on or after `second_start`
    /// yields `"{year}-2"`, a month on or before `second_end` yields `"{year - 1}-2"`.
    /// Otherwise a month within `first_start..=first_end` yields `"{year}-1"`.
    ///
    /// # Returns
    /// - `Some(label)` - The covering semester
    /// - `None` - The configured ranges leave this month uncovered
    pub fn semester_for<D: Datelike>(&self, date: &D) -> Option<String> {
        let month = date.month();
        let year = date.year();

        if month >= self.second_start {
            Some(format!("{}-2", year))
        } else if month <= self.second_end {
            Some(format!("{}-2", year - 1))
        } else if (self.first_start..=self.first_end).contains(&month) {
            Some(format!("{}-1", year))
        } else {
            None
        }
    }
}

/// Checks that `label` is a well-formed semester label.
///
/// # Returns
/// - `Ok(())` - Exactly six characters: a four digit year, `-`, then `1` or `2`
/// - `Err(SemesterError)` - Which part of the label is malformed
pub fn validate_semester(label: &str) -> Result<(), SemesterError> {
    if label.len() != 6 || label.as_bytes()[4] != b'-' {
        return Err(SemesterError::InvalidFormat(label.to_string()));
    }

    let (Some(year), Some(term)) = (label.get(..4), label.get(5..)) else {
        return Err(SemesterError::InvalidFormat(label.to_string()));
    };

    if term != "1" && term != "2" {
        return Err(SemesterError::InvalidTerm(label.to_string()));
    }

    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SemesterError::InvalidYear(label.to_string()));
    }

    Ok(())
}

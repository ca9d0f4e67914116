use chrono_tz::Tz;

use crate::server::{error::config::ConfigError, model::semester::SemesterConfig};

/// Parses an IANA timezone name such as `Asia/Shanghai`.
///
/// An unknown or empty name falls back to UTC with a warning instead of failing
/// startup, matching how an unset `TIME_LOCAL` behaves.
///
/// # Arguments
/// - `name` - IANA timezone name
///
/// # Returns
/// - `Tz` - The parsed zone, or `Tz::UTC` if the name is not recognised
pub fn parse_timezone(name: &str) -> Tz {
    match name.trim().parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!("Unknown timezone '{}', falling back to UTC", name);
            Tz::UTC
        }
    }
}

/// Parses `first_start,first_end,second_start,second_end` month numbers.
///
/// # Arguments
/// - `value` - Four comma separated months, each in `1..=12`
///
/// # Returns
/// - `Ok(SemesterConfig)` - Parsed semester calendar
/// - `Err(ConfigError::InvalidEnvVar)` - Wrong count or a month outside `1..=12`
pub fn parse_semester_months(value: &str) -> Result<SemesterConfig, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "SEMESTER_MONTHS".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let months = value
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid("months must be numbers"))?;

    let [first_start, first_end, second_start, second_end] = months[..] else {
        return Err(invalid("expected exactly four months"));
    };

    if months.iter().any(|month| !(1..=12).contains(month)) {
        return Err(invalid("months must be between 1 and 12"));
    }

    Ok(SemesterConfig {
        first_start,
        first_end,
        second_start,
        second_end,
    })
}

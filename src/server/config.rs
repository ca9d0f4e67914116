//! Environment-driven application configuration.
//!
//! Values are read once at startup (after `dotenvy` has loaded `.env`) and handed to
//! `AppState`. Nothing reads the environment after that point.

use chrono_tz::Tz;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::semester::SemesterConfig,
    util::parse::{parse_semester_months, parse_timezone},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Inputs to the course and enrollment rules that vary per deployment.
#[derive(Clone, Copy, Debug)]
pub struct CourseRules {
    /// Month ranges of the two semesters.
    pub semester: SemesterConfig,
    /// Zone in which course start dates are entered and semesters are computed.
    pub timezone: Tz,
}

impl Default for CourseRules {
    fn default() -> Self {
        Self {
            semester: SemesterConfig::default(),
            timezone: Tz::UTC,
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Origin allowed by CORS; an `https` URL also marks session cookies secure.
    pub app_url: String,

    pub rules: CourseRules,
    pub bcrypt_cost: u32,

    /// Credentials for the admin account created when none exists yet.
    pub admin_job_no: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let timezone = match std::env::var("TIME_LOCAL") {
            Ok(name) => parse_timezone(&name),
            Err(_) => Tz::UTC,
        };

        let semester = match std::env::var("SEMESTER_MONTHS") {
            Ok(value) => parse_semester_months(&value)?,
            Err(_) => SemesterConfig::default(),
        };

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(value) => parse_bcrypt_cost(&value)?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            rules: CourseRules { semester, timezone },
            bcrypt_cost,
            admin_job_no: non_empty_var("ADMIN_JOB_NO"),
            admin_password: non_empty_var("ADMIN_PASSWORD"),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_bcrypt_cost(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "BCRYPT_COST".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let cost = value
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid("not a number"))?;

    if !BCRYPT_COST_RANGE.contains(&cost) {
        return Err(invalid("outside the range bcrypt accepts"));
    }

    Ok(cost)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Check {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub interval_seconds: i64,
    pub last_status: CheckStatus,
    pub last_checked_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Up,
    Down,
    Unknown,
}

impl CheckStatus {
    pub fn display_name(&self) -> &str {
        match self {
            CheckStatus::Up => "Up",
            CheckStatus::Down => "Down",
            CheckStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_class(&self) -> &str {
        match self {
            CheckStatus::Up => "badge badge-green",
            CheckStatus::Down => "badge badge-red",
            CheckStatus::Unknown => "badge badge-gray",
        }
    }
}

/// Rollup over a check's recent runs, fetched per row for the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckSummary {
    pub total_runs: i64,
    pub uptime_percentage: f64,
}

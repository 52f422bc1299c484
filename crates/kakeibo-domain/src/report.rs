//! Derived view types produced by the aggregation layer.
//!
//! All of these are computed on demand and never persisted. Amounts are
//! passed through exactly as recorded; rounding is a presentation concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Income and expense totals for a single calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub income: f64,
    pub expense: f64,
}

/// Expense total attributed to one resolved category within a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Month-level totals with the resulting balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub income: f64,
    pub expense: f64,
    /// `income - expense`; negative when the month ran a deficit.
    pub balance: f64,
}

/// Per-day totals for one calendar day of a month, used as bar-chart data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

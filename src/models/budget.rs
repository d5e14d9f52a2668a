use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suggested daily budget range for a destination, in the same
/// currency-agnostic units as TripData::budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedBudget {
    pub min: u32,
    pub max: u32,
    pub average: u32,
}

/// One expense line in the budget tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub category: String,
    pub description: String,
    pub amount: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_on: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct BudgetEntryInput {
    pub category: String,
    pub description: String,
    pub amount: u32,
    pub spent_on: Option<NaiveDate>,
}

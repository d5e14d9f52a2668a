use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::recommendation::TransportOption;

pub const DEFAULT_DAILY_BUDGET: u32 = 5000;
pub const DEFAULT_TOTAL_BUDGET: u32 = 35000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetType {
    Fixed,
    Flexible,
}

/// Everything the planner wizard collects. Owned by a planner session for its
/// lifetime; discarded when the session ends (only "save" writes anything
/// durable, and that goes through the booking store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripData {
    pub origin: String,
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Advisory only; never changes the derivation math.
    pub budget_type: BudgetType,
    /// Daily budget in currency-agnostic units (rendered as INR upstream).
    pub budget: u32,
    /// Kept consistent with `budget * duration`; see services::budget for the
    /// direction rules.
    pub total_budget: u32,
    pub interests: Vec<String>,
    pub selected_transportation: Option<TransportOption>,
}

impl Default for TripData {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            start_date: None,
            end_date: None,
            budget_type: BudgetType::Fixed,
            budget: DEFAULT_DAILY_BUDGET,
            total_budget: DEFAULT_TOTAL_BUDGET,
            interests: Vec::new(),
            selected_transportation: None,
        }
    }
}

impl TripData {
    /// Adds the interest if absent, removes it if present. Adding then
    /// removing the same id always restores the prior set.
    pub fn toggle_interest(&mut self, id: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == id) {
            self.interests.remove(pos);
        } else {
            self.interests.push(id.to_string());
        }
    }
}

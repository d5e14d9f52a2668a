use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Sightseeing,
    Adventure,
    Food,
    Culture,
    Nature,
    Shopping,
    Nightlife,
    Relaxation,
    Transit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub title: String,
    pub description: String,
    pub kind: ActivityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day index.
    pub day: u32,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCost {
    pub day: u32,
    pub activity_cost: u32,
    pub accommodation_cost: u32,
    pub transport_cost: u32,
}

impl DayCost {
    pub fn total(&self) -> u32 {
        self.activity_cost + self.accommodation_cost + self.transport_cost
    }
}

/// Output of one generation run. Regenerating replaces the whole thing;
/// nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedItinerary {
    pub destination: String,
    pub days: Vec<ItineraryDay>,
    pub day_costs: Vec<DayCost>,
    /// Sum of day costs plus the selected transport price (added once).
    pub total_cost: u32,
}

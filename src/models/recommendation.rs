use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Flight,
    Train,
    Bus,
    Cab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportStatus {
    OnTime,
    Delayed,
    Cancelled,
}

/// One bookable transport listing. Immutable once generated; selecting one in
/// the planner copies it into TripData.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportOption {
    pub id: Uuid,
    pub kind: TransportKind,
    pub name: String,
    pub provider: String,
    pub price: u32,
    pub duration: String,
    pub departure: String,
    pub arrival: String,
    pub stops: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelOption {
    pub id: Uuid,
    pub name: String,
    pub area: String,
    pub price_per_night: u32,
    pub rating: f32,
    pub reviews: u32,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSpot {
    pub id: Uuid,
    pub name: String,
    pub cuisine: String,
    pub price_for_two: u32,
    pub rating: f32,
    pub must_try: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingSpot {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub known_for: String,
    pub price_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportSort {
    Price,
    Rating,
    Duration,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Trip,
    Flight,
    Train,
    Bus,
    Hotel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub kind: BookingKind,
    pub title: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<NaiveDate>,
    pub amount: u32,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct BookingInput {
    pub kind: BookingKind,
    pub title: String,
    pub destination: String,
    pub travel_date: Option<NaiveDate>,
    pub amount: u32,
}

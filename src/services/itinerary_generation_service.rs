use std::error::Error;
use std::fmt;

use crate::models::itinerary::{
    Activity, ActivityKind, DayCost, GeneratedItinerary, ItineraryDay,
};
use crate::models::trip::TripData;
use crate::services::duration::trip_duration;

/// Trip length used when the planner has no dates yet. The source of this
/// behavior had two competing fallbacks (0 and 3); 3 is the one policy kept.
const FALLBACK_TRIP_DAYS: i64 = 3;
const DAILY_TRANSPORT_COST: u32 = 800; // local transit heuristic, per day
const DEFAULT_ACCOMMODATION_COST: u32 = 2500; // per night, unknown destinations
const MAX_ACTIVITIES_PER_DAY: usize = 5;

#[derive(Clone)]
pub struct ItineraryGenerationConfig {
    pub fallback_trip_days: i64,
    pub daily_transport_cost: u32,
    pub default_accommodation_cost: u32,
    pub max_activities_per_day: usize,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            fallback_trip_days: FALLBACK_TRIP_DAYS,
            daily_transport_cost: DAILY_TRANSPORT_COST,
            default_accommodation_cost: DEFAULT_ACCOMMODATION_COST,
            max_activities_per_day: MAX_ACTIVITIES_PER_DAY,
        }
    }
}

#[derive(Debug)]
pub enum GenerationError {
    /// Destination or origin missing; the wizard should have blocked this.
    InvalidInput(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl Error for GenerationError {}

/// A destination with bespoke activities. Everything not listed here falls
/// through to the generic interest-driven templates.
struct DestinationProfile {
    key: &'static str,
    accommodation_per_night: u32,
    /// (title, description, kind, cost) — rotated by day index so consecutive
    /// days get different signature activities.
    signatures: &'static [(&'static str, &'static str, ActivityKind, u32)],
}

const DESTINATION_PROFILES: &[DestinationProfile] = &[
    DestinationProfile {
        key: "goa",
        accommodation_per_night: 3000,
        signatures: &[
            ("Baga Beach morning", "Swim and lounge on Baga Beach before the crowds arrive", ActivityKind::Nature, 0),
            ("Fort Aguada walk", "Explore the 17th-century Portuguese fort and lighthouse", ActivityKind::Sightseeing, 100),
            ("Spice plantation tour", "Guided walk through a working spice farm with lunch", ActivityKind::Culture, 900),
            ("Dudhsagar falls trip", "Jeep safari to the four-tiered waterfall", ActivityKind::Adventure, 1800),
        ],
    },
    DestinationProfile {
        key: "manali",
        accommodation_per_night: 2200,
        signatures: &[
            ("Hadimba Temple visit", "Cedar-forest temple walk in old Manali", ActivityKind::Culture, 50),
            ("Solang Valley day", "Paragliding and ropeway in Solang Valley", ActivityKind::Adventure, 2500),
            ("Old Manali cafes", "Riverside cafe crawl across the Manalsu bridge", ActivityKind::Food, 700),
            ("Jogini waterfall hike", "Half-day hike through Vashisht village", ActivityKind::Nature, 0),
        ],
    },
    DestinationProfile {
        key: "jaipur",
        accommodation_per_night: 2600,
        signatures: &[
            ("Amber Fort morning", "Climb to Amber Fort before the heat sets in", ActivityKind::Sightseeing, 500),
            ("City Palace and Jantar Mantar", "Royal residence and the stone observatory", ActivityKind::Culture, 700),
            ("Johari Bazaar walk", "Gem and textile shopping in the old city", ActivityKind::Shopping, 0),
            ("Nahargarh sunset", "Sunset over the Pink City from the fort walls", ActivityKind::Sightseeing, 200),
        ],
    },
    DestinationProfile {
        key: "kerala",
        accommodation_per_night: 2800,
        signatures: &[
            ("Backwater houseboat", "Slow cruise through the Alleppey backwaters", ActivityKind::Nature, 3500),
            ("Kathakali performance", "Evening classical dance with pre-show makeup viewing", ActivityKind::Culture, 400),
            ("Tea garden walk", "Munnar plantation walk and tasting", ActivityKind::Nature, 300),
            ("Fort Kochi stroll", "Chinese fishing nets and colonial lanes", ActivityKind::Sightseeing, 0),
        ],
    },
    DestinationProfile {
        key: "bali",
        accommodation_per_night: 4000,
        signatures: &[
            ("Tegallalang rice terraces", "Sunrise over the Ubud rice terraces", ActivityKind::Nature, 300),
            ("Uluwatu temple sunset", "Clifftop temple and kecak fire dance", ActivityKind::Culture, 600),
            ("Nusa Penida boat day", "Island day trip with snorkeling stops", ActivityKind::Adventure, 3000),
            ("Ubud market morning", "Craft market and royal palace walk", ActivityKind::Shopping, 0),
        ],
    },
    DestinationProfile {
        key: "dubai",
        accommodation_per_night: 9000,
        signatures: &[
            ("Burj Khalifa deck", "At-the-top observation deck at opening hour", ActivityKind::Sightseeing, 4000),
            ("Desert safari", "Dune bashing, camel ride and barbecue camp", ActivityKind::Adventure, 5500),
            ("Dubai Mall and fountain", "Aquarium walk and the evening fountain show", ActivityKind::Shopping, 0),
            ("Old Dubai souks", "Abra ride across the creek to the gold and spice souks", ActivityKind::Culture, 200),
        ],
    },
];

/// Generic templates used when the destination has no bespoke profile,
/// keyed by interest tag. Rotated by day index like the signatures.
const INTEREST_TEMPLATES: &[(&str, &[(&str, &str, ActivityKind, u32)])] = &[
    ("adventure", &[
        ("Outdoor adventure block", "Local trek, zipline or water sports, whatever the terrain offers", ActivityKind::Adventure, 1500),
        ("Guided adventure tour", "Half-day guided excursion outside town", ActivityKind::Adventure, 2000),
    ]),
    ("culture", &[
        ("Heritage walk", "Old-town walking tour with a local guide", ActivityKind::Culture, 400),
        ("Museum and monuments", "The city's principal museum and nearby monuments", ActivityKind::Culture, 300),
    ]),
    ("food", &[
        ("Street food trail", "Grazing tour of the best-known local stalls", ActivityKind::Food, 500),
        ("Regional thali lunch", "Sit-down tasting of the regional staple dishes", ActivityKind::Food, 600),
    ]),
    ("nature", &[
        ("Scenic viewpoint morning", "Sunrise or early walk at the closest viewpoint", ActivityKind::Nature, 0),
        ("Park or lakefront afternoon", "Unhurried afternoon at the main green space", ActivityKind::Nature, 100),
    ]),
    ("shopping", &[
        ("Local market browse", "Main bazaar for crafts and souvenirs", ActivityKind::Shopping, 0),
        ("Boutique quarter", "Independent shops and galleries district", ActivityKind::Shopping, 0),
    ]),
    ("nightlife", &[
        ("Evening out", "Live music or the neighborhood with the best bars", ActivityKind::Nightlife, 1200),
        ("Night market", "Late-night food and shopping street", ActivityKind::Nightlife, 400),
    ]),
    ("relaxation", &[
        ("Spa session", "Massage or spa hour to reset", ActivityKind::Relaxation, 1500),
        ("Slow morning", "Late breakfast and an unplanned wander", ActivityKind::Relaxation, 0),
    ]),
];

const GENERIC_SIGNATURES: &[(&str, &str, ActivityKind, u32)] = &[
    ("City highlights tour", "Orientation loop past the landmarks everyone asks about", ActivityKind::Sightseeing, 600),
    ("Neighborhood exploration", "A different quarter of the city on foot", ActivityKind::Sightseeing, 0),
    ("Day trip nearby", "Short excursion to the most recommended spot outside town", ActivityKind::Adventure, 1200),
];

pub struct ItineraryGenerator {
    config: ItineraryGenerationConfig,
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self {
            config: ItineraryGenerationConfig::default(),
        }
    }

    pub fn with_config(config: ItineraryGenerationConfig) -> Self {
        Self { config }
    }

    /// Builds the full day-by-day itinerary and its cost aggregate for a trip.
    ///
    /// The caller (wizard controller) is expected to have validated the trip,
    /// but empty locations are still rejected here rather than producing an
    /// itinerary for nowhere.
    pub fn generate(&self, trip: &TripData) -> Result<GeneratedItinerary, GenerationError> {
        if trip.destination.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "destination is required".to_string(),
            ));
        }
        if trip.origin.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "origin is required".to_string(),
            ));
        }

        let mut days_count = trip_duration(trip.start_date, trip.end_date);
        if days_count == 0 {
            days_count = self.config.fallback_trip_days;
        }

        let profile = find_profile(&trip.destination);
        let accommodation = profile
            .map(|p| p.accommodation_per_night)
            .unwrap_or(self.config.default_accommodation_cost);

        let mut days = Vec::with_capacity(days_count as usize);
        let mut day_costs = Vec::with_capacity(days_count as usize);

        for day_num in 1..=days_count as u32 {
            let activities = self.build_day(trip, profile, day_num, days_count as u32);
            let activity_cost: u32 = activities.iter().filter_map(|a| a.cost).sum();

            day_costs.push(DayCost {
                day: day_num,
                activity_cost,
                accommodation_cost: accommodation,
                transport_cost: self.config.daily_transport_cost,
            });
            days.push(ItineraryDay {
                day: day_num,
                activities,
            });
        }

        let mut total_cost: u32 = day_costs.iter().map(|c| c.total()).sum();
        if let Some(transport) = &trip.selected_transportation {
            // The inter-city fare is added once, not per day.
            total_cost += transport.price;
        }

        Ok(GeneratedItinerary {
            destination: trip.destination.clone(),
            days,
            day_costs,
            total_cost,
        })
    }

    /// One day's schedule: arrival/departure transit on the edge days, a
    /// signature activity rotated by day index, then interest-driven slots up
    /// to the per-day cap, and dinner.
    fn build_day(
        &self,
        trip: &TripData,
        profile: Option<&DestinationProfile>,
        day_num: u32,
        total_days: u32,
    ) -> Vec<Activity> {
        let idx = (day_num - 1) as usize;
        let mut activities = Vec::new();

        if day_num == 1 {
            activities.push(Activity {
                time: "09:00".to_string(),
                title: "Arrival and check-in".to_string(),
                description: format!("Arrive from {} and settle in", trip.origin),
                kind: ActivityKind::Transit,
                cost: None,
            });
        }

        let signatures = profile.map(|p| p.signatures).unwrap_or(GENERIC_SIGNATURES);
        let (title, desc, kind, cost) = signatures[idx % signatures.len()];
        activities.push(Activity {
            time: "10:30".to_string(),
            title: title.to_string(),
            description: desc.to_string(),
            kind,
            cost: Some(cost),
        });

        // Rotate which interests get a slot so a long trip cycles through all
        // of them instead of repeating the first two every day.
        if !trip.interests.is_empty() {
            let slots = 2usize.min(trip.interests.len());
            for s in 0..slots {
                if activities.len() >= self.config.max_activities_per_day {
                    break;
                }
                let interest = &trip.interests[(idx + s) % trip.interests.len()];
                if let Some(templates) = interest_templates(interest) {
                    let (title, desc, kind, cost) = templates[idx % templates.len()];
                    activities.push(Activity {
                        time: if s == 0 { "14:00" } else { "16:30" }.to_string(),
                        title: title.to_string(),
                        description: desc.to_string(),
                        kind,
                        cost: Some(cost),
                    });
                }
            }
        }

        if activities.len() < self.config.max_activities_per_day {
            activities.push(Activity {
                time: "19:30".to_string(),
                title: "Dinner".to_string(),
                description: if day_num % 2 == 1 {
                    "Dinner at a well-reviewed local restaurant".to_string()
                } else {
                    "Dinner somewhere new, picked on the day".to_string()
                },
                kind: ActivityKind::Food,
                cost: Some(800),
            });
        }

        if day_num == total_days {
            activities.push(Activity {
                time: "21:00".to_string(),
                title: "Pack and check-out prep".to_string(),
                description: format!("Wrap up and get ready for the trip back to {}", trip.origin),
                kind: ActivityKind::Transit,
                cost: None,
            });
        }

        activities
    }
}

impl Default for ItineraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(destination: &str) -> String {
    destination
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

fn find_profile(destination: &str) -> Option<&'static DestinationProfile> {
    let needle = normalize(destination);
    if needle.is_empty() {
        return None;
    }
    // Same longest-key-wins rule as the budget suggestion lookup.
    DESTINATION_PROFILES
        .iter()
        .filter(|p| needle.contains(p.key) || p.key.contains(needle.as_str()))
        .max_by_key(|p| p.key.len())
}

fn interest_templates(
    interest: &str,
) -> Option<&'static [(&'static str, &'static str, ActivityKind, u32)]> {
    let needle = interest.trim().to_lowercase();
    INTEREST_TEMPLATES
        .iter()
        .find(|(key, _)| *key == needle)
        .map(|(_, templates)| *templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip(destination: &str, days: u32) -> TripData {
        let start = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        TripData {
            origin: "Mumbai".to_string(),
            destination: destination.to_string(),
            start_date: Some(start),
            end_date: Some(start + chrono::Duration::days(days as i64 - 1)),
            ..TripData::default()
        }
    }

    #[test]
    fn test_empty_destination_is_rejected() {
        let mut t = trip("Goa, India", 3);
        t.destination.clear();
        let err = ItineraryGenerator::new().generate(&t).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_origin_is_rejected() {
        let mut t = trip("Goa, India", 3);
        t.origin.clear();
        assert!(ItineraryGenerator::new().generate(&t).is_err());
    }

    #[test]
    fn test_day_count_matches_duration() {
        let itinerary = ItineraryGenerator::new().generate(&trip("Goa", 4)).unwrap();
        assert_eq!(itinerary.days.len(), 4);
        assert_eq!(itinerary.day_costs.len(), 4);
        assert_eq!(itinerary.days[0].day, 1);
        assert_eq!(itinerary.days[3].day, 4);
    }

    #[test]
    fn test_missing_dates_fall_back_to_three_days() {
        let mut t = trip("Goa", 2);
        t.start_date = None;
        t.end_date = None;
        let itinerary = ItineraryGenerator::new().generate(&t).unwrap();
        assert_eq!(itinerary.days.len(), 3);
    }

    #[test]
    fn test_config_overrides_apply() {
        let config = ItineraryGenerationConfig {
            fallback_trip_days: 5,
            daily_transport_cost: 0,
            ..ItineraryGenerationConfig::default()
        };
        let mut t = trip("Goa", 2);
        t.start_date = None;
        t.end_date = None;
        let itinerary = ItineraryGenerator::with_config(config).generate(&t).unwrap();
        assert_eq!(itinerary.days.len(), 5);
        assert!(itinerary.day_costs.iter().all(|c| c.transport_cost == 0));
    }

    #[test]
    fn test_total_cost_aggregation() {
        let t = trip("Jaipur, Rajasthan", 3);
        let itinerary = ItineraryGenerator::new().generate(&t).unwrap();
        let expected: u32 = itinerary.day_costs.iter().map(|c| c.total()).sum();
        assert_eq!(itinerary.total_cost, expected);
        // Jaipur profile accommodation, charged every day.
        assert!(itinerary
            .day_costs
            .iter()
            .all(|c| c.accommodation_cost == 2600));
    }

    #[test]
    fn test_selected_transport_added_once() {
        use crate::models::recommendation::{TransportKind, TransportOption};
        use uuid::Uuid;

        let mut t = trip("Bali", 3);
        let without = ItineraryGenerator::new().generate(&t).unwrap();
        t.selected_transportation = Some(TransportOption {
            id: Uuid::new_v4(),
            kind: TransportKind::Flight,
            name: "WP-201".to_string(),
            provider: "AirWander".to_string(),
            price: 5000,
            duration: "4h 30m".to_string(),
            departure: "08:15".to_string(),
            arrival: "12:45".to_string(),
            stops: 0,
            rating: None,
            reviews: None,
            availability: None,
            status: None,
            delay_minutes: None,
            distance: None,
        });
        let with = ItineraryGenerator::new().generate(&t).unwrap();
        assert_eq!(with.total_cost, without.total_cost + 5000);
    }

    #[test]
    fn test_consecutive_days_vary() {
        let itinerary = ItineraryGenerator::new().generate(&trip("Goa", 3)).unwrap();
        let titles: Vec<&str> = itinerary
            .days
            .iter()
            .map(|d| d.activities[if d.day == 1 { 1 } else { 0 }].title.as_str())
            .collect();
        assert_ne!(titles[0], titles[1]);
        assert_ne!(titles[1], titles[2]);
    }

    #[test]
    fn test_interests_drive_generic_destinations() {
        let mut t = trip("Pondicherry", 2);
        t.interests = vec!["food".to_string()];
        let itinerary = ItineraryGenerator::new().generate(&t).unwrap();
        let has_food = itinerary
            .days
            .iter()
            .flat_map(|d| &d.activities)
            .any(|a| a.kind == ActivityKind::Food && a.title != "Dinner");
        assert!(has_food);
        // Unknown destination gets the default accommodation heuristic.
        assert_eq!(itinerary.day_costs[0].accommodation_cost, 2500);
    }
}

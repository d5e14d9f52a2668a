use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::models::recommendation::{
    FoodSpot, HotelOption, ShoppingSpot, TransportKind, TransportOption, TransportSort,
    TransportStatus,
};

/// Inventory source for the planner's transportation step and the explore
/// screens. Behind a trait so the wizard and its tests never depend on
/// randomness; the production impl below is the mock catalog the product
/// ships with today.
pub trait RecommendationProvider: Send + Sync {
    fn transport_options(&self, origin: &str, destination: &str) -> Vec<TransportOption>;
    fn hotels(&self, destination: &str) -> Vec<HotelOption>;
    fn food_spots(&self, destination: &str) -> Vec<FoodSpot>;
    fn shopping_spots(&self, destination: &str) -> Vec<ShoppingSpot>;
}

/// (kind, name, provider, base price, duration, departure, arrival, stops)
const TRANSPORT_SEED: &[(TransportKind, &str, &str, u32, &str, &str, &str, u32)] = &[
    (TransportKind::Flight, "WP-201", "AirWander", 4800, "1h 25m", "06:40", "08:05", 0),
    (TransportKind::Flight, "WP-318", "SkyLink", 5600, "1h 30m", "11:15", "12:45", 0),
    (TransportKind::Flight, "WP-442", "AirWander", 3900, "3h 10m", "17:20", "20:30", 1),
    (TransportKind::Train, "Coastal Express", "IR 10103", 1450, "8h 45m", "22:05", "06:50", 5),
    (TransportKind::Train, "Janshatabdi", "IR 12051", 980, "9h 20m", "05:25", "14:45", 8),
    (TransportKind::Bus, "Volvo A/C Sleeper", "RoadStar", 1200, "11h 30m", "20:30", "08:00", 2),
    (TransportKind::Bus, "Semi-Sleeper", "GreenLine", 850, "12h 15m", "19:00", "07:15", 4),
    (TransportKind::Cab, "Sedan (door to door)", "DriveEasy", 7500, "10h 00m", "On demand", "-", 0),
];

const HOTEL_SEED: &[(&str, &str, u32, f32, &[&str])] = &[
    ("The Courtyard Residency", "City centre", 3200, 4.3, &["wifi", "breakfast", "pool"]),
    ("Sunset View Inn", "Near the waterfront", 2100, 4.0, &["wifi", "parking"]),
    ("Heritage Haveli Stay", "Old town", 2800, 4.5, &["wifi", "breakfast", "rooftop"]),
    ("Backpacker's Loft", "Market quarter", 900, 3.8, &["wifi", "lockers"]),
    ("Grand Meridian", "Business district", 5400, 4.6, &["wifi", "breakfast", "gym", "spa"]),
];

const FOOD_SEED: &[(&str, &str, u32, f32, &str)] = &[
    ("Spice Route Kitchen", "Regional", 800, 4.4, "Chef's thali"),
    ("Corner Chaat House", "Street food", 250, 4.2, "Pani puri platter"),
    ("The Coastal Table", "Seafood", 1400, 4.5, "Catch of the day"),
    ("Cafe Daybreak", "Continental", 700, 4.1, "All-day breakfast"),
    ("Darbar Dining Hall", "North Indian", 1000, 4.3, "Dal makhani"),
];

const SHOPPING_SEED: &[(&str, &str, &str, &str)] = &[
    ("Central Bazaar", "Market", "Textiles and spices", "budget"),
    ("Artisan's Lane", "Crafts", "Handmade souvenirs", "mid"),
    ("City Walk Mall", "Mall", "Brands and food court", "premium"),
    ("Antique Row", "Curios", "Vintage finds", "mid"),
];

pub struct MockRecommendationProvider {
    rng: Mutex<StdRng>,
}

impl MockRecommendationProvider {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic listings for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockRecommendationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationProvider for MockRecommendationProvider {
    fn transport_options(&self, origin: &str, destination: &str) -> Vec<TransportOption> {
        let mut rng = self.rng.lock().unwrap();
        TRANSPORT_SEED
            .iter()
            .map(|&(kind, name, provider, base, duration, departure, arrival, stops)| {
                // Jitter fares +/-15% so repeated searches feel live.
                let jitter = rng.gen_range(-15i32..=15);
                let price = (base as i64 + base as i64 * jitter as i64 / 100).max(100) as u32;
                let delayed = rng.gen_range(0u8..10) == 0;
                TransportOption {
                    id: Uuid::new_v4(),
                    kind,
                    name: name.to_string(),
                    provider: provider.to_string(),
                    price,
                    duration: duration.to_string(),
                    departure: departure.to_string(),
                    arrival: arrival.to_string(),
                    stops,
                    rating: Some((rng.gen_range(34u32..=48) as f32) / 10.0),
                    reviews: Some(rng.gen_range(40..3000)),
                    availability: Some(format!("{} seats left", rng.gen_range(2..40))),
                    status: Some(if delayed {
                        TransportStatus::Delayed
                    } else {
                        TransportStatus::OnTime
                    }),
                    delay_minutes: delayed.then(|| rng.gen_range(10..90)),
                    distance: Some(route_distance(origin, destination)),
                }
            })
            .collect()
    }

    fn hotels(&self, destination: &str) -> Vec<HotelOption> {
        let mut rng = self.rng.lock().unwrap();
        HOTEL_SEED
            .iter()
            .map(|&(name, area, base, rating, amenities)| HotelOption {
                id: Uuid::new_v4(),
                name: name.to_string(),
                area: format!("{}, {}", area, leading_segment(destination)),
                price_per_night: base + rng.gen_range(0..400),
                rating,
                reviews: rng.gen_range(50..2500),
                amenities: amenities.iter().map(|a| a.to_string()).collect(),
            })
            .collect()
    }

    fn food_spots(&self, destination: &str) -> Vec<FoodSpot> {
        let mut rng = self.rng.lock().unwrap();
        FOOD_SEED
            .iter()
            .map(|&(name, cuisine, base, rating, must_try)| FoodSpot {
                id: Uuid::new_v4(),
                name: format!("{} ({})", name, leading_segment(destination)),
                cuisine: cuisine.to_string(),
                price_for_two: base + rng.gen_range(0..200),
                rating,
                must_try: must_try.to_string(),
            })
            .collect()
    }

    fn shopping_spots(&self, destination: &str) -> Vec<ShoppingSpot> {
        SHOPPING_SEED
            .iter()
            .map(|&(name, category, known_for, price_level)| ShoppingSpot {
                id: Uuid::new_v4(),
                name: format!("{} {}", leading_segment(destination), name),
                category: category.to_string(),
                known_for: known_for.to_string(),
                price_level: price_level.to_string(),
            })
            .collect()
    }
}

fn leading_segment(destination: &str) -> String {
    destination.split(',').next().unwrap_or("").trim().to_string()
}

/// Stable pseudo-distance so the same route always reports the same figure.
fn route_distance(origin: &str, destination: &str) -> String {
    let hash: u32 = origin
        .chars()
        .chain(destination.chars())
        .map(|c| c as u32)
        .sum();
    format!("{} km", 120 + hash % 1800)
}

/// Parses listing durations like "1h 25m" or "45m" to minutes. Anything that
/// does not parse sorts last.
fn duration_minutes(duration: &str) -> u32 {
    let mut minutes = 0;
    let mut matched = false;
    for part in duration.split_whitespace() {
        if let Some(h) = part.strip_suffix('h') {
            if let Ok(h) = h.parse::<u32>() {
                minutes += h * 60;
                matched = true;
            }
        } else if let Some(m) = part.strip_suffix('m') {
            if let Ok(m) = m.parse::<u32>() {
                minutes += m;
                matched = true;
            }
        }
    }
    if matched {
        minutes
    } else {
        u32::MAX
    }
}

pub fn sort_transport(options: &mut [TransportOption], sort: TransportSort) {
    match sort {
        TransportSort::Price => options.sort_by_key(|o| o.price),
        TransportSort::Rating => options.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .partial_cmp(&a.rating.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        TransportSort::Duration => options.sort_by_key(|o| duration_minutes(&o.duration)),
    }
}

pub fn filter_transport(options: Vec<TransportOption>, kind: Option<TransportKind>) -> Vec<TransportOption> {
    match kind {
        Some(kind) => options.into_iter().filter(|o| o.kind == kind).collect(),
        None => options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_provider_is_deterministic() {
        let a = MockRecommendationProvider::seeded(7).transport_options("Mumbai", "Goa");
        let b = MockRecommendationProvider::seeded(7).transport_options("Mumbai", "Goa");
        let prices_a: Vec<u32> = a.iter().map(|o| o.price).collect();
        let prices_b: Vec<u32> = b.iter().map(|o| o.price).collect();
        assert_eq!(prices_a, prices_b);
    }

    #[test]
    fn test_delayed_listings_carry_delay_minutes() {
        let provider = MockRecommendationProvider::seeded(42);
        for _ in 0..20 {
            for option in provider.transport_options("Delhi", "Manali") {
                match option.status {
                    Some(TransportStatus::Delayed) => assert!(option.delay_minutes.is_some()),
                    _ => assert!(option.delay_minutes.is_none()),
                }
            }
        }
    }

    #[test]
    fn test_sort_by_price() {
        let mut options = MockRecommendationProvider::seeded(1).transport_options("Pune", "Goa");
        sort_transport(&mut options, TransportSort::Price);
        assert!(options.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_duration_minutes_parsing() {
        assert_eq!(duration_minutes("1h 25m"), 85);
        assert_eq!(duration_minutes("11h 30m"), 690);
        assert_eq!(duration_minutes("45m"), 45);
        assert_eq!(duration_minutes("On demand"), u32::MAX);
    }

    #[test]
    fn test_sort_by_duration_uses_elapsed_time() {
        let mut options = MockRecommendationProvider::seeded(1).transport_options("Pune", "Goa");
        sort_transport(&mut options, TransportSort::Duration);
        let minutes: Vec<u32> = options
            .iter()
            .map(|o| duration_minutes(&o.duration))
            .collect();
        assert!(minutes.windows(2).all(|w| w[0] <= w[1]));
        // The short flight must beat the overnight train despite "11h" sorting
        // before "1h" lexicographically.
        assert_eq!(options[0].duration, "1h 25m");
    }

    #[test]
    fn test_filter_by_kind() {
        let options = MockRecommendationProvider::seeded(1).transport_options("Pune", "Goa");
        let trains = filter_transport(options, Some(TransportKind::Train));
        assert!(!trains.is_empty());
        assert!(trains.iter().all(|o| o.kind == TransportKind::Train));
    }

    #[test]
    fn test_route_distance_is_stable() {
        assert_eq!(route_distance("Mumbai", "Goa"), route_distance("Mumbai", "Goa"));
    }

    #[test]
    fn test_listings_localize_to_destination() {
        let provider = MockRecommendationProvider::seeded(3);
        assert!(provider.hotels("Goa, India")[0].area.contains("Goa"));
        assert!(provider.shopping_spots("Jaipur")[0].name.starts_with("Jaipur"));
    }
}

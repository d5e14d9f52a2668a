pub mod assistant_service;
pub mod budget;
pub mod duration;
pub mod itinerary_generation_service;
pub mod recommendation_service;
pub mod suggestion;
pub mod wizard;

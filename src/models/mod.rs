pub mod booking;
pub mod budget;
pub mod document;
pub mod itinerary;
pub mod recommendation;
pub mod trip;
pub mod user;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::db::store::JsonStore;
use crate::services::assistant_service::AssistantService;
use crate::services::itinerary_generation_service::ItineraryGenerator;
use crate::services::recommendation_service::RecommendationProvider;
use crate::services::wizard::PlannerWizard;

/// Everything the handlers share. Injected explicitly (web::Data) so nothing
/// reaches for ambient globals and the store/provider can be swapped in
/// tests.
pub struct AppState {
    pub store: Arc<JsonStore>,
    /// One in-flight wizard per signed-in traveler. In-process only; a
    /// restart drops unfinished plans, matching the session-scoped lifecycle
    /// of the planner.
    pub sessions: Mutex<HashMap<Uuid, PlannerWizard>>,
    pub generator: ItineraryGenerator,
    pub recommendations: Arc<dyn RecommendationProvider>,
    /// None when the chat API is not configured; assistant routes answer 503.
    pub assistant: Option<AssistantService>,
}

impl AppState {
    pub fn new(
        store: Arc<JsonStore>,
        recommendations: Arc<dyn RecommendationProvider>,
        assistant: Option<AssistantService>,
    ) -> Self {
        Self {
            store,
            sessions: Mutex::new(HashMap::new()),
            generator: ItineraryGenerator::new(),
            recommendations,
            assistant,
        }
    }
}

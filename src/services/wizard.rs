use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::itinerary::GeneratedItinerary;
use crate::models::recommendation::TransportOption;
use crate::models::trip::{BudgetType, TripData};
use crate::services::budget::BudgetMath;
use crate::services::duration::trip_duration;
use crate::services::itinerary_generation_service::{GenerationError, ItineraryGenerator};

/// The six planner steps, strictly linear. Results is terminal; "save" is a
/// side action on it, not a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Destination,
    Dates,
    Budget,
    Interests,
    Transportation,
    Results,
}

impl WizardStep {
    fn next(&self) -> WizardStep {
        match self {
            WizardStep::Destination => WizardStep::Dates,
            WizardStep::Dates => WizardStep::Budget,
            WizardStep::Budget => WizardStep::Interests,
            WizardStep::Interests => WizardStep::Transportation,
            WizardStep::Transportation => WizardStep::Results,
            WizardStep::Results => WizardStep::Results,
        }
    }

    fn prev(&self) -> WizardStep {
        match self {
            WizardStep::Destination => WizardStep::Destination,
            WizardStep::Dates => WizardStep::Destination,
            WizardStep::Budget => WizardStep::Dates,
            WizardStep::Interests => WizardStep::Budget,
            WizardStep::Transportation => WizardStep::Interests,
            WizardStep::Results => WizardStep::Transportation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    MissingLocations,
    MissingDates,
    EndBeforeStart,
    NoInterests,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingLocations => {
                write!(f, "Origin and destination are required")
            }
            ValidationError::MissingDates => write!(f, "Start and end dates are required"),
            ValidationError::EndBeforeStart => {
                write!(f, "End date cannot be before the start date")
            }
            ValidationError::NoInterests => write!(f, "Select at least one interest"),
        }
    }
}

#[derive(Debug)]
pub enum WizardError {
    Validation(ValidationError),
    Generation(GenerationError),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::Validation(err) => write!(f, "{}", err),
            WizardError::Generation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for WizardError {}

impl From<GenerationError> for WizardError {
    fn from(err: GenerationError) -> Self {
        WizardError::Generation(err)
    }
}

/// One user's pass through the planner. Holds the trip being assembled, the
/// current step, and the generated itinerary once Step 5 completes. All
/// derivation rules (budget anchoring on date changes vs. slider moves) are
/// applied by the setters here so route handlers stay thin.
#[derive(Debug, Clone, Serialize)]
pub struct PlannerWizard {
    pub trip: TripData,
    pub step: WizardStep,
    pub itinerary: Option<GeneratedItinerary>,
}

impl Default for PlannerWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerWizard {
    pub fn new() -> Self {
        Self {
            trip: TripData::default(),
            step: WizardStep::Destination,
            itinerary: None,
        }
    }

    /// Starts a wizard pre-seeded with locations picked outside the planner.
    pub fn seeded(origin: Option<String>, destination: Option<String>) -> Self {
        let mut wizard = Self::new();
        if let Some(origin) = origin {
            wizard.trip.origin = origin;
        }
        if let Some(destination) = destination {
            wizard.trip.destination = destination;
        }
        wizard
    }

    pub fn set_locations(&mut self, origin: String, destination: String) {
        self.trip.origin = origin;
        self.trip.destination = destination;
    }

    /// Date changes keep the daily budget as the stable anchor: the total is
    /// recomputed from it with the new day count. Deliberately asymmetric
    /// with `set_total_budget`.
    pub fn set_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.trip.start_date = start;
        self.trip.end_date = end;
        let days = trip_duration(start, end);
        self.trip.total_budget = BudgetMath::total_from_daily(self.trip.budget, days);
    }

    pub fn set_budget_type(&mut self, budget_type: BudgetType) {
        // Advisory only.
        self.trip.budget_type = budget_type;
    }

    pub fn set_daily_budget(&mut self, daily: u32) {
        self.trip.budget = daily;
        let days = trip_duration(self.trip.start_date, self.trip.end_date);
        self.trip.total_budget = BudgetMath::total_from_daily(daily, days);
    }

    /// Moving the total-budget control makes the total the anchor; the daily
    /// budget is re-derived from it.
    pub fn set_total_budget(&mut self, total: u32) {
        self.trip.total_budget = total;
        let days = trip_duration(self.trip.start_date, self.trip.end_date);
        self.trip.budget = BudgetMath::daily_from_total(total, days);
    }

    pub fn toggle_interest(&mut self, id: &str) {
        self.trip.toggle_interest(id);
    }

    /// At most one transport option; selecting replaces, `None` clears.
    pub fn select_transportation(&mut self, option: Option<TransportOption>) {
        self.trip.selected_transportation = option;
    }

    /// Validates the current step and moves forward one step. Leaving the
    /// Transportation step runs the generator and only enters Results when
    /// generation succeeds; every failure leaves the step unchanged.
    pub fn advance(&mut self, generator: &ItineraryGenerator) -> Result<WizardStep, WizardError> {
        self.validate_current_step()
            .map_err(WizardError::Validation)?;

        if self.step == WizardStep::Transportation {
            let itinerary = generator.generate(&self.trip)?;
            self.itinerary = Some(itinerary);
        }

        self.step = self.step.next();
        Ok(self.step)
    }

    /// Steps back one step without validation; a no-op on the first step.
    /// Collected fields (dates, interests, transport selection) are kept.
    pub fn retreat(&mut self) -> WizardStep {
        self.step = self.step.prev();
        self.step
    }

    fn validate_current_step(&self) -> Result<(), ValidationError> {
        match self.step {
            WizardStep::Destination => {
                if self.trip.origin.trim().is_empty() || self.trip.destination.trim().is_empty() {
                    return Err(ValidationError::MissingLocations);
                }
            }
            WizardStep::Dates => match (self.trip.start_date, self.trip.end_date) {
                (Some(start), Some(end)) => {
                    if end < start {
                        return Err(ValidationError::EndBeforeStart);
                    }
                }
                _ => return Err(ValidationError::MissingDates),
            },
            WizardStep::Interests => {
                if self.trip.interests.is_empty() {
                    return Err(ValidationError::NoInterests);
                }
            }
            // Budget always has a value; Transportation is optional; Results
            // has no forward transition to validate.
            WizardStep::Budget | WizardStep::Transportation | WizardStep::Results => {}
        }
        Ok(())
    }
}

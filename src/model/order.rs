use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::validation::{OrderDraft, RuleViolation, validate_draft};

/// How far out a new order's end date defaults, in days.
const DEFAULT_END_DATE_OFFSET_DAYS: u64 = 14;

/// A war order: a timed challenge request issued on behalf of a team.
///
/// Immutable once constructed; this is the payload handed to the session
/// for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarOrder {
    pub team_id: String,
    pub contact: String,
    pub title: String,
    pub description: String,
    pub end_date: NaiveDate,
}

impl WarOrder {
    /// Creates a new war order, validating the text fields against their rules.
    ///
    /// The team id is not rule-checked here; callers gate on team selection
    /// before constructing the payload.
    pub fn new(
        team_id: String,
        contact: String,
        title: String,
        description: String,
        end_date: NaiveDate,
    ) -> Result<Self, Vec<RuleViolation>> {
        validate_draft(&OrderDraft {
            title: &title,
            description: &description,
            contact: &contact,
            end_date: Some(end_date),
        })?;
        Ok(Self {
            team_id,
            contact,
            title,
            description,
            end_date,
        })
    }
}

/// Returns the default end date for an order created on `today`.
///
/// Date-only arithmetic: two weeks out regardless of time of day.
pub fn default_end_date(today: NaiveDate) -> NaiveDate {
    today + Days::new(DEFAULT_END_DATE_OFFSET_DAYS)
}

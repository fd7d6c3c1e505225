use super::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer's recorded interaction with a property (view, inquiry, rating).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: i64,
    pub customer_id: String,
    pub property_id: i64,
    pub interaction_date: DateTime<Utc>,
    pub interaction_type: String,
    pub interaction_value: f64,
}

/// An interaction with its customer loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    #[serde(flatten)]
    pub interaction: Interaction,
    pub customer: Option<UserRef>,
}

/// A new interaction, customer and date already stamped.
#[derive(Debug, Clone)]
pub struct NewInteraction {
    pub customer_id: String,
    pub property_id: i64,
    pub interaction_date: DateTime<Utc>,
    pub interaction_type: String,
    pub interaction_value: f64,
}

/// Mutable fields of an interaction. The date is reset to the update time.
#[derive(Debug, Clone)]
pub struct InteractionUpdate {
    pub interaction_type: String,
    pub interaction_value: f64,
    pub interaction_date: DateTime<Utc>,
}

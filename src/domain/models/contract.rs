use super::{PropertyRef, UserRef};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rental or sale contract between an owner and a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub amount: BigDecimal,
    pub property_id: i64,
    pub customer_id: String,
    pub owner_id: String,
}

/// A contract with its parties and property loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    #[serde(flatten)]
    pub contract: Contract,
    pub property: Option<PropertyRef>,
    pub customer: Option<UserRef>,
    pub owner: Option<UserRef>,
}

/// A new contract, owner already stamped from the principal.
#[derive(Debug, Clone)]
pub struct NewContract {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub amount: BigDecimal,
    pub property_id: i64,
    pub customer_id: String,
    pub owner_id: String,
}

/// Mutable fields of a contract. The owner is not writable through update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractUpdate {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub amount: BigDecimal,
    pub property_id: i64,
    pub customer_id: String,
}

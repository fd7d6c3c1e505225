use super::PropertyRef;
use serde::{Deserialize, Serialize};

/// A client's bookmark on a property. The (client, property) pair is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub client_id: String,
    pub property_id: i64,
}

/// A favorite with its property loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    #[serde(flatten)]
    pub favorite: Favorite,
    pub property: Option<PropertyRef>,
}

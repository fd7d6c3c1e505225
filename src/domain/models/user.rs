use super::{Appointment, Interaction, PropertyRef};
use serde::{Deserialize, Serialize};

/// The role a user account holds. Drives every authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Owner,
    Client,
    Broker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Owner => "Owner",
            Role::Client => "Client",
            Role::Broker => "Broker",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Owner" => Ok(Role::Owner),
            "Client" => Ok(Role::Client),
            "Broker" => Ok(Role::Broker),
            other => Err(anyhow::anyhow!("unknown user type: {other}")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account. Ids are opaque UUID strings issued at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: Role,
}

/// Mutable fields of a user account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub user_type: Role,
}

/// A user with its back-references loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(flatten)]
    pub user: User,
    pub properties: Vec<PropertyRef>,
    pub appointments: Vec<Appointment>,
    pub interactions: Vec<Interaction>,
}

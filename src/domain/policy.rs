//! The authorization and ownership policy.
//!
//! Every mutation endpoint funnels its decision through [`authorize`]: a
//! deterministic, total function of the requesting principal and the
//! attempted action. Handlers never re-implement checks.
//!
//! The check order is a contract: authentication, then existence (handlers
//! look the record up before building the action), then ownership/role, then
//! business rules such as the past-appointment cutoff. An unauthenticated
//! request against a nonexistent resource is therefore denied as
//! unauthenticated, never as not-found.

use crate::domain::models::Role;
use chrono::{DateTime, Utc};
use thiserror::Error;


/// The authenticated identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// An attempted operation, carrying the stored facts the rule needs.
#[derive(Debug, Clone)]
pub enum Action<'a> {
    ListUsers,
    ViewUser {
        user_id: &'a str,
    },
    ManageUsers,
    CreateProperty,
    MutateProperty {
        owner_id: &'a str,
    },
    CreateAppointment,
    MutateAppointment {
        client_id: &'a str,
        appointment_date: DateTime<Utc>,
        now: DateTime<Utc>,
    },
    CreateContract,
    MutateContract {
        owner_id: &'a str,
    },
    AccessFavorites,
    ListInteractions,
    CreateInteraction,
    UpdateInteraction {
        customer_id: &'a str,
    },
    DeleteInteraction,
}

/// Why an action was denied. Authentication failures are distinct from
/// ownership/role failures, which are distinct from business-rule failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denial {
    #[error("User not authenticated.")]
    NotAuthenticated,
    #[error("You do not have permission to perform this action.")]
    Forbidden,
    #[error("Cannot modify past appointments.")]
    PastAppointment,
}

/// The authentication gate. Handlers for authenticated operations call this
/// before any lookup so the 401/404 ordering holds.
pub fn require_principal(principal: Option<&Principal>) -> Result<&Principal, Denial> {
    principal.ok_or(Denial::NotAuthenticated)
}

/// Decide whether `principal` may perform `action`.
pub fn authorize(principal: Option<&Principal>, action: Action<'_>) -> Result<(), Denial> {
    let principal = require_principal(principal)?;

    match action {
        Action::ListUsers | Action::ManageUsers => require_role(principal, &[Role::Admin]),
        Action::ViewUser { user_id } => {
            if principal.role == Role::Admin {
                return Ok(());
            }
            require_owner(principal, user_id)
        }
        Action::CreateProperty | Action::CreateContract => {
            require_role(principal, &[Role::Owner, Role::Broker])
        }
        Action::MutateProperty { owner_id } | Action::MutateContract { owner_id } => {
            require_owner(principal, owner_id)
        }
        Action::CreateAppointment => require_role(principal, &[Role::Client]),
        Action::MutateAppointment {
            client_id,
            appointment_date,
            now,
        } => {
            require_owner(principal, client_id)?;
            if appointment_date < now {
                return Err(Denial::PastAppointment);
            }
            Ok(())
        }
        Action::AccessFavorites | Action::ListInteractions | Action::CreateInteraction => Ok(()),
        Action::UpdateInteraction { customer_id } => require_owner(principal, customer_id),
        // Observed behavior: deletion carries no ownership check. Kept as-is
        // pending product sign-off; see DESIGN.md.
        Action::DeleteInteraction => Ok(()),
    }
}

fn require_role(principal: &Principal, allowed: &[Role]) -> Result<(), Denial> {
    if allowed.contains(&principal.role) {
        Ok(())
    } else {
        Err(Denial::Forbidden)
    }
}

fn require_owner(principal: &Principal, owner_id: &str) -> Result<(), Denial> {
    if principal.id == owner_id {
        Ok(())
    } else {
        Err(Denial::Forbidden)
    }
}

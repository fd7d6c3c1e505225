//! Domain entities and the relationship-loaded read models the API serves.

mod appointment;
mod common;
mod contract;
mod favorite;
mod interaction;
mod property;
mod user;

pub use appointment::{Appointment, AppointmentRecord, NewAppointment};
pub use common::{PropertyRef, UserRef};
pub use contract::{Contract, ContractRecord, ContractUpdate, NewContract};
pub use favorite::{Favorite, FavoriteRecord};
pub use interaction::{
    Interaction, InteractionRecord, InteractionUpdate, NewInteraction,
};
pub use property::{
    Location, NewLocation, NewProperty, Property, PropertyImage, PropertyRecord, PropertyUpdate,
};
pub use user::{Role, User, UserRecord, UserUpdate};

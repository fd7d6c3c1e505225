/*!
Property Management Service

A REST backend for properties, appointments, contracts, favorites,
interactions, and users, with a centralized authorization/ownership policy.
*/

#![warn(
    unreachable_pub,
    redundant_lifetimes,
    unsafe_code,
    non_local_definitions,
    clippy::needless_pass_by_value,
    clippy::needless_pass_by_ref_mut
)]

pub mod api;
pub mod config;
pub mod domain;
pub mod entrypoint;
pub mod outbound;

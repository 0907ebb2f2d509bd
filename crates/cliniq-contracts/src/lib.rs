// Wire contracts for the Cliniq clinic-management API
// This crate defines the response envelope and the DTOs exchanged with the
// backend. The backend uses Mongo-style `_id` keys and camelCase fields;
// renames live here so the rest of the workspace stays idiomatic.

pub mod appointment;
pub mod auth;
pub mod common;
pub mod doctor;
pub mod patient;
pub mod role;
pub mod session;

pub use appointment::*;
pub use auth::*;
pub use common::*;
pub use doctor::*;
pub use patient::*;
pub use role::*;
pub use session::*;

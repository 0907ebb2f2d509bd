// I/O layer for Cliniq: the reqwest-backed API client, the auth gateway,
// the per-role dashboard loaders, and the SessionStore implementations.
//
// Design decision: the 401 side effect (clear session, force re-login) is
// an explicit UnauthorizedHandler event the host registers, not a hidden
// redirect buried inside the transport.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod loaders;
pub mod store;

pub use auth::*;
pub use client::*;
pub use loaders::*;
pub use store::*;

//! Client for the hosted backend ("the gateway"): row storage with embedded
//! joins under `/rest/v1`, token auth under `/auth/v1`. The gateway owns all
//! entity lifecycles; this side only reads snapshots and holds a session.

mod auth;
mod client;
mod error;
mod query;

pub use auth::{GatewaySession, GatewayUser};
pub use client::GatewayClient;
pub use error::GatewayError;
pub use query::{Direction, Select};

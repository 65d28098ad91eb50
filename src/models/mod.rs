// Typed projections for the four gateway queries, one module per table,
// plus the dashboard aggregation layer.

pub mod inventory;
pub mod location;
pub mod request;
pub mod resource;
pub mod stats;

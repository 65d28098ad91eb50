use serde::Deserialize;

use crate::gateway::{GatewayClient, GatewayError, Select};

/// A warehouse or facility holding inventory.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
}

pub fn query() -> Select {
    Select::from("locations")
}

pub async fn list_all(
    gateway: &GatewayClient,
    access_token: &str,
) -> Result<Vec<Location>, GatewayError> {
    gateway.select(&query(), Some(access_token)).await
}

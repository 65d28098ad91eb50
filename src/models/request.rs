use serde::Deserialize;

use crate::gateway::{GatewayClient, GatewayError, Select};

/// A relief request as far as the dashboard cares: its status. Transitions
/// are owned by the gateway; other request fields stay unmapped here.
#[derive(Debug, Clone, Deserialize)]
pub struct ReliefRequest {
    pub id: String,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Fulfilled,
    Denied,
    #[serde(other)]
    Other,
}

impl ReliefRequest {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// Only rows with status exactly "pending" count, whatever the collection
/// happens to contain. The fetch already filters gateway-side; this keeps the
/// count honest even against a misbehaving response.
pub fn pending_count(rows: &[ReliefRequest]) -> usize {
    rows.iter().filter(|r| r.is_pending()).count()
}

pub fn pending_query() -> Select {
    Select::from("requests").eq("status", "pending")
}

pub async fn list_pending(
    gateway: &GatewayClient,
    access_token: &str,
) -> Result<Vec<ReliefRequest>, GatewayError> {
    gateway.select(&pending_query(), Some(access_token)).await
}

use std::time::Duration;

use crate::gateway::GatewayClient;
use crate::models::inventory::InventoryRecord;
use crate::models::location::Location;
use crate::models::request::ReliefRequest;
use crate::models::resource::Resource;
use crate::snapshot::SnapshotCell;

/// Shared application state: the gateway client plus one snapshot cell per
/// query key. Each fetch result flows into its own slot; there is no shared
/// mutable state between the four collections.
pub struct AppState {
    pub gateway: GatewayClient,
    pub snapshot_ttl: Duration,
    pub resources: SnapshotCell<Vec<Resource>>,
    pub locations: SnapshotCell<Vec<Location>>,
    pub inventory: SnapshotCell<Vec<InventoryRecord>>,
    pub pending_requests: SnapshotCell<Vec<ReliefRequest>>,
}

impl AppState {
    pub fn new(gateway: GatewayClient, snapshot_ttl: Duration) -> Self {
        Self {
            gateway,
            snapshot_ttl,
            resources: SnapshotCell::new(),
            locations: SnapshotCell::new(),
            inventory: SnapshotCell::new(),
            pending_requests: SnapshotCell::new(),
        }
    }
}

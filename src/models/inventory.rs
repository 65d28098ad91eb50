use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::gateway::{GatewayClient, GatewayError, Select};

/// One stock level, joined gateway-side with its resource and location.
/// Quantity and threshold are nullable at the boundary: the gateway schema
/// allows rows that have not been fully populated yet.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryRecord {
    pub id: String,
    pub resource_id: String,
    pub location_id: String,
    pub quantity_available: Option<f64>,
    pub minimum_threshold: Option<f64>,
    pub last_updated_date: DateTime<Utc>,
    #[serde(rename = "resources")]
    pub resource: Option<ResourceRef>,
    #[serde(rename = "locations")]
    pub location: Option<LocationRef>,
}

/// Embedded projection of the joined resource row.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    pub unit_of_measure: String,
}

/// Embedded projection of the joined location row.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRef {
    pub name: String,
}

/// Stock status derived per record on every render; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Low,
    Adequate,
}

impl InventoryRecord {
    /// Low iff available quantity is at or below the minimum threshold.
    /// Equality counts as Low: a shelf sitting exactly at its minimum is
    /// already a restock candidate.
    ///
    /// A record missing either number reads as Adequate. An unpopulated row
    /// must not trip the low-stock alarm.
    pub fn status(&self) -> StockStatus {
        match (self.quantity_available, self.minimum_threshold) {
            (Some(available), Some(threshold)) if available <= threshold => StockStatus::Low,
            _ => StockStatus::Adequate,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.status() == StockStatus::Low
    }

    pub fn resource_name(&self) -> &str {
        self.resource.as_ref().map(|r| r.name.as_str()).unwrap_or("—")
    }

    pub fn location_name(&self) -> &str {
        self.location.as_ref().map(|l| l.name.as_str()).unwrap_or("—")
    }

    pub fn unit(&self) -> &str {
        self.resource
            .as_ref()
            .map(|r| r.unit_of_measure.as_str())
            .unwrap_or("")
    }

    pub fn available_label(&self) -> String {
        quantity_label(self.quantity_available, self.unit())
    }

    pub fn threshold_label(&self) -> String {
        quantity_label(self.minimum_threshold, self.unit())
    }
}

fn quantity_label(quantity: Option<f64>, unit: &str) -> String {
    match quantity {
        Some(q) if q.fract() == 0.0 => format!("{} {unit}", q as i64).trim_end().to_string(),
        Some(q) => format!("{q} {unit}").trim_end().to_string(),
        None => "—".to_string(),
    }
}

/// Count of records at or below threshold in one snapshot. Pure counting,
/// independent of row order.
pub fn low_stock_count(rows: &[InventoryRecord]) -> usize {
    rows.iter().filter(|r| r.is_low_stock()).count()
}

pub fn query() -> Select {
    Select::from("inventory")
        .embed("resources", &["name", "unit_of_measure"])
        .embed("locations", &["name"])
        .order_desc("last_updated_date")
}

pub async fn list_with_details(
    gateway: &GatewayClient,
    access_token: &str,
) -> Result<Vec<InventoryRecord>, GatewayError> {
    gateway.select(&query(), Some(access_token)).await
}

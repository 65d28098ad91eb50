use serde::Deserialize;

use crate::gateway::{GatewayClient, GatewayError, Select};

/// Catalog entry for a kind of relief supply. Names are assumed unique per
/// catalog; the gateway owns creation and mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub unit_of_measure: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Water,
    Food,
    Medical,
    Shelter,
    Equipment,
    #[serde(other)]
    Other,
}

impl ResourceType {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Water => "water",
            ResourceType::Food => "food",
            ResourceType::Medical => "medical",
            ResourceType::Shelter => "shelter",
            ResourceType::Equipment => "equipment",
            ResourceType::Other => "other",
        }
    }

    /// Badge style for the resources table.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ResourceType::Water | ResourceType::Equipment => "default",
            ResourceType::Food | ResourceType::Other => "secondary",
            ResourceType::Medical => "destructive",
            ResourceType::Shelter => "outline",
        }
    }
}

impl Resource {
    pub fn description_label(&self) -> &str {
        self.description.as_deref().unwrap_or("—")
    }
}

pub fn query() -> Select {
    Select::from("resources").order_asc("name")
}

pub async fn list_all(
    gateway: &GatewayClient,
    access_token: &str,
) -> Result<Vec<Resource>, GatewayError> {
    gateway.select(&query(), Some(access_token)).await
}

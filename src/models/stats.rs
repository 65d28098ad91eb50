use crate::gateway::GatewayError;
use crate::models::inventory::{self, InventoryRecord};
use crate::models::location::Location;
use crate::models::request::{self, ReliefRequest};
use crate::models::resource::Resource;

/// Outcome of one section's fetch. A failed fetch stays visibly failed: zero
/// is a legitimate business value (zero pending requests), so it must never
/// double as "unknown due to error".
#[derive(Debug, Clone)]
pub enum Section<T> {
    Ready(T),
    Failed(String),
}

impl<T> Section<T> {
    pub fn from_fetch(name: &str, result: Result<T, GatewayError>) -> Self {
        match result {
            Ok(rows) => Section::Ready(rows),
            Err(e) => {
                log::error!("{name} fetch failed: {e}");
                Section::Failed(e.to_string())
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed(_))
    }
}

/// One stat tile's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Ready(usize),
    Unavailable,
}

impl Metric {
    pub fn value_label(&self) -> String {
        match self {
            Metric::Ready(n) => n.to_string(),
            Metric::Unavailable => "—".to_string(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        *self == Metric::Unavailable
    }
}

fn count_metric<T>(section: &Section<Vec<T>>, count: impl Fn(&[T]) -> usize) -> Metric {
    match section {
        Section::Ready(rows) => Metric::Ready(count(rows)),
        Section::Failed(_) => Metric::Unavailable,
    }
}

/// The four summary metrics on the dashboard's stat tiles, each degrading
/// independently of the other three fetches.
#[derive(Debug, Clone)]
pub struct DashboardMetrics {
    pub total_resources: Metric,
    pub total_locations: Metric,
    pub low_stock: Metric,
    pub pending_requests: Metric,
}

impl DashboardMetrics {
    pub fn compute(
        resources: &Section<Vec<Resource>>,
        locations: &Section<Vec<Location>>,
        inventory: &Section<Vec<InventoryRecord>>,
        requests: &Section<Vec<ReliefRequest>>,
    ) -> Self {
        Self {
            total_resources: count_metric(resources, <[Resource]>::len),
            total_locations: count_metric(locations, <[Location]>::len),
            low_stock: count_metric(inventory, inventory::low_stock_count),
            pending_requests: count_metric(requests, request::pending_count),
        }
    }

    pub fn resources_variant(&self) -> &'static str {
        plain_variant(self.total_resources)
    }

    pub fn locations_variant(&self) -> &'static str {
        plain_variant(self.total_locations)
    }

    /// Warning as soon as anything is below threshold, success when nothing is.
    pub fn low_stock_variant(&self) -> &'static str {
        match self.low_stock {
            Metric::Ready(0) => "success",
            Metric::Ready(_) => "warning",
            Metric::Unavailable => "error",
        }
    }

    pub fn pending_variant(&self) -> &'static str {
        match self.pending_requests {
            Metric::Ready(0) => "default",
            Metric::Ready(_) => "critical",
            Metric::Unavailable => "error",
        }
    }
}

fn plain_variant(metric: Metric) -> &'static str {
    match metric {
        Metric::Ready(_) => "default",
        Metric::Unavailable => "error",
    }
}

//! Select builder tests: the four concrete queries the dashboard issues, in
//! the gateway's query-string dialect.

use reliefboard::gateway::Select;
use reliefboard::models::{inventory, location, request, resource};

fn pairs(select: &Select) -> Vec<(String, String)> {
    select.query_pairs()
}

#[test]
fn test_resources_query() {
    let q = resource::query();
    assert_eq!(q.table(), "resources");
    assert_eq!(q.path(), "/rest/v1/resources");
    assert_eq!(
        pairs(&q),
        vec![
            ("select".to_string(), "*".to_string()),
            ("order".to_string(), "name.asc".to_string()),
        ]
    );
}

#[test]
fn test_locations_query_is_unordered() {
    let q = location::query();
    assert_eq!(q.table(), "locations");
    assert_eq!(pairs(&q), vec![("select".to_string(), "*".to_string())]);
}

#[test]
fn test_inventory_query_embeds_and_orders() {
    let q = inventory::query();
    assert_eq!(q.table(), "inventory");
    assert_eq!(
        pairs(&q),
        vec![
            (
                "select".to_string(),
                "*,resources(name,unit_of_measure),locations(name)".to_string()
            ),
            ("order".to_string(), "last_updated_date.desc".to_string()),
        ]
    );
}

#[test]
fn test_requests_query_filters_pending_gateway_side() {
    let q = request::pending_query();
    assert_eq!(q.table(), "requests");
    assert_eq!(
        pairs(&q),
        vec![
            ("select".to_string(), "*".to_string()),
            ("status".to_string(), "eq.pending".to_string()),
        ]
    );
}

#[test]
fn test_builder_combines_filter_and_order() {
    let q = Select::from("requests")
        .eq("status", "pending")
        .order_desc("created_at");
    assert_eq!(
        pairs(&q),
        vec![
            ("select".to_string(), "*".to_string()),
            ("status".to_string(), "eq.pending".to_string()),
            ("order".to_string(), "created_at.desc".to_string()),
        ]
    );
}

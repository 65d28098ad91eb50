//! Status derivation tests: the low-stock predicate over inventory records,
//! including the inclusive boundary and null handling.

use chrono::{TimeZone, Utc};

use reliefboard::models::inventory::{
    InventoryRecord, LocationRef, ResourceRef, StockStatus, low_stock_count,
};

fn record(available: Option<f64>, threshold: Option<f64>) -> InventoryRecord {
    InventoryRecord {
        id: "i1".to_string(),
        resource_id: "r1".to_string(),
        location_id: "l1".to_string(),
        quantity_available: available,
        minimum_threshold: threshold,
        last_updated_date: Utc.with_ymd_and_hms(2026, 8, 20, 9, 30, 0).unwrap(),
        resource: Some(ResourceRef {
            name: "Bottled Water".to_string(),
            unit_of_measure: "liters".to_string(),
        }),
        location: Some(LocationRef {
            name: "Central Depot".to_string(),
        }),
    }
}

#[test]
fn test_below_threshold_is_low() {
    let r = record(Some(5.0), Some(10.0));
    assert_eq!(r.status(), StockStatus::Low);
    assert!(r.is_low_stock());
}

#[test]
fn test_above_threshold_is_adequate() {
    let r = record(Some(20.0), Some(10.0));
    assert_eq!(r.status(), StockStatus::Adequate);
    assert!(!r.is_low_stock());
}

#[test]
fn test_boundary_equality_is_low() {
    // Sitting exactly at the minimum counts as low
    let r = record(Some(10.0), Some(10.0));
    assert_eq!(r.status(), StockStatus::Low);
}

#[test]
fn test_zero_available_zero_threshold_is_low() {
    let r = record(Some(0.0), Some(0.0));
    assert_eq!(r.status(), StockStatus::Low);
}

#[test]
fn test_missing_quantity_reads_adequate() {
    let r = record(None, Some(10.0));
    assert_eq!(r.status(), StockStatus::Adequate);
}

#[test]
fn test_missing_threshold_reads_adequate() {
    let r = record(Some(5.0), None);
    assert_eq!(r.status(), StockStatus::Adequate);
}

#[test]
fn test_missing_both_reads_adequate() {
    let r = record(None, None);
    assert_eq!(r.status(), StockStatus::Adequate);
}

#[test]
fn test_low_stock_count_scenario_a() {
    let rows = vec![record(Some(5.0), Some(10.0)), record(Some(20.0), Some(10.0))];
    assert_eq!(low_stock_count(&rows), 1);
}

#[test]
fn test_low_stock_count_empty_snapshot() {
    assert_eq!(low_stock_count(&[]), 0);
}

#[test]
fn test_low_stock_count_order_independent() {
    let rows = vec![
        record(Some(5.0), Some(10.0)),
        record(Some(20.0), Some(10.0)),
        record(Some(10.0), Some(10.0)),
        record(None, Some(3.0)),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();
    assert_eq!(low_stock_count(&rows), 2);
    assert_eq!(low_stock_count(&reversed), low_stock_count(&rows));
}

#[test]
fn test_quantity_labels_carry_unit() {
    let r = record(Some(5.0), Some(10.0));
    assert_eq!(r.available_label(), "5 liters");
    assert_eq!(r.threshold_label(), "10 liters");

    let fractional = record(Some(2.5), Some(10.0));
    assert_eq!(fractional.available_label(), "2.5 liters");

    let missing = record(None, Some(10.0));
    assert_eq!(missing.available_label(), "—");
}

#[test]
fn test_unjoined_record_falls_back_in_labels() {
    let mut r = record(Some(5.0), Some(10.0));
    r.resource = None;
    r.location = None;
    assert_eq!(r.resource_name(), "—");
    assert_eq!(r.location_name(), "—");
    assert_eq!(r.available_label(), "5");
}

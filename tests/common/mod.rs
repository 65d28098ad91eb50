//! Shared test infrastructure: a stub gateway speaking the hosted backend's
//! REST and auth dialects, plus JSON fixtures for the four tables.
//!
//! `spawn_gateway` binds an ephemeral port and serves whatever each test
//! configured per table: canned rows, a fixed failure status, or a few
//! failures followed by rows (for retry tests). Request counts per table are
//! recorded so tests can assert on retry behavior.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

pub const TEST_EMAIL: &str = "coordinator@relief.test";
pub const TEST_PASSWORD: &str = "correct-horse-battery";
pub const TEST_TOKEN: &str = "test-access-token";
pub const TEST_API_KEY: &str = "publishable-test-key";

#[derive(Clone)]
pub enum StubTable {
    Rows(Value),
    Fail(u16),
    FailFirst { remaining: Arc<AtomicU32>, rows: Value },
}

#[derive(Clone, Default)]
pub struct StubConfig {
    tables: HashMap<String, StubTable>,
    hits: Arc<Mutex<HashMap<String, u32>>>,
}

impl StubConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, name: &str, rows: Value) -> Self {
        self.tables.insert(name.to_string(), StubTable::Rows(rows));
        self
    }

    pub fn failing(mut self, name: &str, status: u16) -> Self {
        self.tables.insert(name.to_string(), StubTable::Fail(status));
        self
    }

    /// Serve `failures` 500s for this table, then the given rows.
    pub fn flaky(mut self, name: &str, failures: u32, rows: Value) -> Self {
        self.tables.insert(
            name.to_string(),
            StubTable::FailFirst {
                remaining: Arc::new(AtomicU32::new(failures)),
                rows,
            },
        );
        self
    }

    pub fn hit_count(&self, name: &str) -> u32 {
        *self.hits.lock().unwrap().get(name).unwrap_or(&0)
    }
}

async fn rest_handler(
    req: HttpRequest,
    stub: web::Data<StubConfig>,
    path: web::Path<String>,
) -> HttpResponse {
    let table = path.into_inner();
    *stub.hits.lock().unwrap().entry(table.clone()).or_insert(0) += 1;

    if req.headers().get("apikey").is_none() {
        return HttpResponse::Unauthorized()
            .json(json!({ "message": "No API key found in request" }));
    }

    match stub.tables.get(&table) {
        Some(StubTable::Rows(rows)) => HttpResponse::Ok().json(rows),
        Some(StubTable::Fail(status)) => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(json!({ "message": "stub failure" }))
        }
        Some(StubTable::FailFirst { remaining, rows }) => {
            if remaining.load(Ordering::SeqCst) > 0 {
                remaining.fetch_sub(1, Ordering::SeqCst);
                HttpResponse::InternalServerError().json(json!({ "message": "transient" }))
            } else {
                HttpResponse::Ok().json(rows)
            }
        }
        None => HttpResponse::Ok().json(json!([])),
    }
}

async fn token_handler(body: web::Json<Value>) -> HttpResponse {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email == TEST_EMAIL && password == TEST_PASSWORD {
        HttpResponse::Ok().json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "bearer",
            "expires_in": 3600,
            "user": { "id": "8d1c43a7-0000-4000-8000-000000000001", "email": TEST_EMAIL }
        }))
    } else {
        HttpResponse::BadRequest().json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        }))
    }
}

async fn logout_handler() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Start the stub gateway on an ephemeral port; returns its base URL.
pub async fn spawn_gateway(stub: StubConfig) -> String {
    let data = web::Data::new(stub);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/rest/v1/{table}", web::get().to(rest_handler))
            .route("/auth/v1/token", web::post().to(token_handler))
            .route("/auth/v1/logout", web::post().to(logout_handler))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind stub gateway");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn inventory_row(id: &str, available: f64, threshold: f64) -> Value {
    json!({
        "id": id,
        "resource_id": format!("res-{id}"),
        "location_id": format!("loc-{id}"),
        "quantity_available": available,
        "minimum_threshold": threshold,
        "last_updated_date": "2026-08-20T09:30:00Z",
        "resources": { "name": "Bottled Water", "unit_of_measure": "liters" },
        "locations": { "name": "Central Depot" }
    })
}

pub fn resource_row(id: &str, name: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "unit_of_measure": "units",
        "description": null
    })
}

pub fn location_row(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

pub fn request_row(id: &str, status: &str) -> Value {
    json!({ "id": id, "status": status })
}

/// A stub with small, healthy collections for all four tables.
pub fn healthy_stub() -> StubConfig {
    StubConfig::new()
        .table(
            "resources",
            json!([
                resource_row("r1", "Blankets", "shelter"),
                resource_row("r2", "Bottled Water", "water"),
            ]),
        )
        .table(
            "locations",
            json!([location_row("l1", "Central Depot"), location_row("l2", "North Warehouse")]),
        )
        .table(
            "inventory",
            json!([inventory_row("i1", 5.0, 10.0), inventory_row("i2", 20.0, 10.0)]),
        )
        .table(
            "requests",
            json!([request_row("q1", "pending"), request_row("q2", "pending")]),
        )
}

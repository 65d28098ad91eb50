use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::session::get_access_token;
use crate::errors::{AppError, render};
use crate::gateway::GatewayError;
use crate::models::stats::{DashboardMetrics, Section};
use crate::models::{inventory, location, request, resource};
use crate::state::AppState;
use crate::templates_structs::{DashboardTemplate, PageContext};

fn auth_expired<T>(result: &Result<T, GatewayError>) -> Option<String> {
    match result {
        Err(GatewayError::AuthUnavailable(e)) => Some(e.clone()),
        _ => None,
    }
}

pub async fn index(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    let token = get_access_token(&session)
        .ok_or_else(|| AppError::Session("No access token in session".to_string()))?;

    let ttl = state.snapshot_ttl;
    let gateway = &state.gateway;

    // Four independent fetches; none blocks the others and each failure
    // degrades only its own section.
    let (resources, locations, inventory, requests) = tokio::join!(
        state
            .resources
            .refresh_with(ttl, || resource::list_all(gateway, &token)),
        state
            .locations
            .refresh_with(ttl, || location::list_all(gateway, &token)),
        state
            .inventory
            .refresh_with(ttl, || inventory::list_with_details(gateway, &token)),
        state
            .pending_requests
            .refresh_with(ttl, || request::list_pending(gateway, &token)),
    );

    // An expired token fails every query the same way; send the user back to
    // the login form instead of painting four error tiles.
    if let Some(e) = auth_expired(&resources)
        .or_else(|| auth_expired(&locations))
        .or_else(|| auth_expired(&inventory))
        .or_else(|| auth_expired(&requests))
    {
        return Err(AppError::Gateway(GatewayError::AuthUnavailable(e)));
    }

    let resources = Section::from_fetch("resources", resources);
    let locations = Section::from_fetch("locations", locations);
    let inventory = Section::from_fetch("inventory", inventory);
    let requests = Section::from_fetch("requests", requests);

    let metrics = DashboardMetrics::compute(&resources, &locations, &inventory, &requests);

    let (inventory_rows, inventory_failed) = match inventory {
        Section::Ready(rows) => (rows, false),
        Section::Failed(_) => (Vec::new(), true),
    };
    let (resource_rows, resources_failed) = match resources {
        Section::Ready(rows) => (rows, false),
        Section::Failed(_) => (Vec::new(), true),
    };

    let tmpl = DashboardTemplate {
        ctx,
        metrics,
        inventory_rows,
        inventory_failed,
        resource_rows,
        resources_failed,
    };
    render(tmpl)
}

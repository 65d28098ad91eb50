use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::{csrf, session};
use crate::config::APP_NAME;
use crate::errors::{AppError, render};
use crate::gateway::GatewayError;
use crate::state::AppState;
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // Already signed in: straight to the dashboard
    if session::get_access_token(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let flash = session::take_flash(&session);
    let tmpl = LoginTemplate {
        error: None,
        flash,
        app_name: APP_NAME.to_string(),
        csrf_token,
    };
    render(tmpl)
}

pub async fn login_submit(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match state.gateway.sign_in(&form.email, &form.password).await {
        Ok(gw_session) => {
            let _ = session.insert("access_token", &gw_session.access_token);
            let _ = session.insert("email", &gw_session.user.email);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish())
        }
        Err(GatewayError::AuthUnavailable(_)) => {
            let csrf_token = csrf::get_or_create_token(&session);
            let tmpl = LoginTemplate {
                error: Some("Invalid email or password".to_string()),
                flash: None,
                app_name: APP_NAME.to_string(),
                csrf_token,
            };
            render(tmpl)
        }
        Err(e) => {
            log::error!("Sign-in failed: {e}");
            let csrf_token = csrf::get_or_create_token(&session);
            let tmpl = LoginTemplate {
                error: Some("Sign-in is temporarily unavailable. Please try again.".to_string()),
                flash: None,
                app_name: APP_NAME.to_string(),
                csrf_token,
            };
            render(tmpl)
        }
    }
}

pub async fn logout(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Best-effort revocation; the cookie session is purged regardless
    if let Some(token) = session::get_access_token(&session) {
        if let Err(e) = state.gateway.sign_out(&token).await {
            log::warn!("Gateway sign-out failed: {e}");
        }
    }

    // Drop all session state and cycle the session id, keeping only the flash
    session.clear();
    session.renew();
    session::set_flash(&session, "You have been signed out.");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}

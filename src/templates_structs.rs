// Template context structures for Askama templates.

use actix_session::Session;
use askama::Template;

use crate::auth::csrf;
use crate::auth::session::{get_email, take_flash};
use crate::config::APP_NAME;
use crate::errors::AppError;
use crate::models::inventory::InventoryRecord;
use crate::models::resource::Resource;
use crate::models::stats::DashboardMetrics;

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.email`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub email: String,
    pub avatar_initial: String,
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let email = get_email(session)
            .map_err(|e| AppError::Session(format!("Failed to get email: {}", e)))?;
        let csrf_token = csrf::get_or_create_token(session);
        let avatar_initial = email
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        let flash = take_flash(session);
        Ok(Self {
            email,
            avatar_initial,
            app_name: APP_NAME.to_string(),
            csrf_token,
            flash,
        })
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub metrics: DashboardMetrics,
    pub inventory_rows: Vec<InventoryRecord>,
    pub inventory_failed: bool,
    pub resource_rows: Vec<Resource>,
    pub resources_failed: bool,
}

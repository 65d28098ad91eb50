use actix_session::Session;

/// The gateway access token for the signed-in user, if any. Presence of the
/// token is the entire auth gate; token internals are never inspected here.
pub fn get_access_token(session: &Session) -> Option<String> {
    session.get::<String>("access_token").unwrap_or(None)
}

pub fn get_email(session: &Session) -> Result<String, String> {
    match session.get::<String>("email") {
        Ok(Some(email)) => Ok(email),
        Ok(None) => Err("No email in session".to_string()),
        Err(e) => Err(format!("Session error: {}", e)),
    }
}

/// One-shot flash message, consumed on read.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

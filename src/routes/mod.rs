use actix_session::Session as CookieSession;
use actix_web::http::header;
use actix_web::{HttpResponse, http::header::ContentType};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::Tera;

use crate::domain::session::Session;
use crate::repository::DieselStore;
use crate::services::auth;

pub mod auth_pages;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod favorites;
pub mod orders;
pub mod profile;
pub mod shop;

/// Cookie-session key holding the active coupon discount percentage. The
/// discount is ephemeral view state; only the bag itself lives in the store.
pub(crate) const DISCOUNT_SESSION_KEY: &str = "discount";

/// One-shot notice rendered by the base template.
#[derive(Serialize)]
struct Alert {
    level: &'static str,
    message: String,
}

/// Issues a `303 See Other` to `path`.
pub fn redirect(path: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, path))
        .finish()
}

/// Renders `template` with `context`, degrading to a 500 on template errors.
pub fn render_template(tera: &Tera, template: &str, context: &tera::Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Builds the context shared by every page: flash notices, the visitor's
/// session and the active navigation entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    session: &Session,
    active_page: &str,
) -> tera::Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: match message.level() {
                Level::Success => "success",
                Level::Warning => "warning",
                Level::Error => "error",
                _ => "info",
            },
            message: message.content().to_string(),
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("alerts", &alerts);
    context.insert("signed_in", &session.is_signed_in());
    context.insert("is_agent", &session.is_agent());
    context.insert("active_page", active_page);
    context
}

/// Loads the visitor's session from the store, or an error response when the
/// store is unreachable.
pub(crate) fn load_session(store: &DieselStore) -> Result<Session, HttpResponse> {
    auth::current_session(store).map_err(|err| {
        log::error!("Failed to load session: {err}");
        HttpResponse::InternalServerError().finish()
    })
}

/// Reads the active discount percentage from the cookie session. A missing
/// or unreadable value means no discount.
pub(crate) fn active_discount(session_state: &CookieSession) -> u8 {
    session_state
        .get::<u8>(DISCOUNT_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or(0)
}

/// Stores the active discount percentage. The whole value is overwritten,
/// so the freshest application wins.
pub(crate) fn set_discount(session_state: &CookieSession, percent: u8) {
    if let Err(err) = session_state.insert(DISCOUNT_SESSION_KEY, percent) {
        log::error!("Failed to store discount state: {err}");
    }
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::profile::ProfileForm;
use crate::repository::DieselStore;
use crate::routes::{base_context, load_session, redirect, render_template};
use crate::services::{ServiceError, profile};

#[get("/profile")]
pub async fn show_profile(
    store: web::Data<DieselStore>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match profile::load_profile_page(&session) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &session, "profile");
            context.insert("profile", &data);
            render_template(&tera, "profile/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::warning("Sign in to edit your profile.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to load the profile page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/profile")]
pub async fn save_profile(
    form: web::Form<ProfileForm>,
    store: web::Data<DieselStore>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match profile::save_profile(&session, &form) {
        Ok(()) => {
            FlashMessage::success("Profile updated.").send();
            redirect("/profile")
        }
        Err(ServiceError::Unauthorized) => redirect("/login"),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/profile")
        }
        Err(err) => {
            log::error!("Failed to save the profile: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::UserType;
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::repository::DieselStore;
use crate::routes::{base_context, load_session, redirect, render_template};
use crate::services::{ServiceError, auth};

fn landing_page(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Agent => "/dashboard",
        UserType::User => "/shop",
    }
}

#[get("/login")]
pub async fn show_login(
    store: web::Data<DieselStore>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    if let Some(user_type) = session.user_type {
        return redirect(landing_page(user_type));
    }

    let context = base_context(&flash_messages, &session, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(form: web::Form<LoginForm>, store: web::Data<DieselStore>) -> impl Responder {
    match auth::login(store.get_ref(), form.into_inner()) {
        Ok(user_type) => redirect(landing_page(user_type)),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/register")]
pub async fn show_register(
    store: web::Data<DieselStore>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    if let Some(user_type) = session.user_type {
        return redirect(landing_page(user_type));
    }

    let context = base_context(&flash_messages, &session, "register");
    render_template(&tera, "auth/register.html", &context)
}

#[post("/register")]
pub async fn register(
    form: web::Form<RegisterForm>,
    store: web::Data<DieselStore>,
) -> impl Responder {
    match auth::register(store.get_ref(), form.into_inner()) {
        Ok(user_type) => {
            FlashMessage::success("Welcome! Your account has been created.").send();
            redirect(landing_page(user_type))
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/register")
        }
        Err(err) => {
            log::error!("Failed to register: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/logout")]
pub async fn logout(store: web::Data<DieselStore>) -> impl Responder {
    match auth::logout(store.get_ref()) {
        Ok(()) => redirect("/login"),
        Err(err) => {
            log::error!("Failed to sign out: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

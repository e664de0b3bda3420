use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::repository::DieselStore;
use crate::routes::{base_context, load_session, redirect, render_template};
use crate::services::{ServiceError, orders};

#[get("/orders")]
pub async fn show_orders(
    store: web::Data<DieselStore>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match orders::load_orders_page(&session) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &session, "orders");
            context.insert("orders", &data.orders);
            render_template(&tera, "orders/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::warning("Sign in to see your order history.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to load the orders page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/orders/{order_id}/reorder")]
pub async fn reorder(path: web::Path<i32>, store: web::Data<DieselStore>) -> impl Responder {
    let order_id = path.into_inner();
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match orders::reorder(&session, order_id) {
        Err(ServiceError::NotImplemented) => {
            FlashMessage::warning("Re-ordering is not available yet.").send();
            redirect("/orders")
        }
        Err(ServiceError::Unauthorized) => redirect("/login"),
        Ok(()) => redirect("/orders"),
        Err(err) => {
            log::error!("Failed to reorder {order_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/orders/{order_id}/review")]
pub async fn write_review(path: web::Path<i32>, store: web::Data<DieselStore>) -> impl Responder {
    let order_id = path.into_inner();
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match orders::write_review(&session, order_id) {
        Err(ServiceError::NotImplemented) => {
            FlashMessage::warning("Review writing is not available yet.").send();
            redirect("/orders")
        }
        Err(ServiceError::Unauthorized) => redirect("/login"),
        Ok(()) => redirect("/orders"),
        Err(err) => {
            log::error!("Failed to start a review for {order_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

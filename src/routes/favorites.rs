use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::repository::{DieselStore, InMemoryCatalog};
use crate::routes::{base_context, load_session, redirect, render_template};
use crate::services::{ServiceError, favorites};

#[get("/favorites")]
pub async fn show_favorites(
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match favorites::load_favorites_page(catalog.get_ref(), store.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &session, "favorites");
            context.insert("items", &data.items);
            render_template(&tera, "favorites/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the favorites page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/favorites/{product_id}/remove")]
pub async fn remove_favorite(
    path: web::Path<i32>,
    store: web::Data<DieselStore>,
) -> impl Responder {
    let product_id = path.into_inner();

    match favorites::remove_favorite(store.get_ref(), product_id) {
        Ok(()) => redirect("/favorites"),
        Err(err) => {
            log::error!("Failed to remove favorite {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/favorites/{product_id}/cart")]
pub async fn move_favorite_to_cart(
    path: web::Path<i32>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
) -> impl Responder {
    let product_id = path.into_inner();

    match favorites::add_favorite_to_cart(catalog.get_ref(), store.get_ref(), product_id) {
        Ok(name) => {
            FlashMessage::success(format!("{name} has been added to your bag.")).send();
            redirect("/cart")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That product is no longer available.").send();
            redirect("/favorites")
        }
        Err(err) => {
            log::error!("Failed to move favorite {product_id} to the bag: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

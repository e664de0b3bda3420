use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::cart::AddToCartForm;
use crate::repository::{DieselStore, InMemoryCatalog};
use crate::routes::{base_context, load_session, redirect, render_template};
use crate::services::{ServiceError, shop};

#[get("/")]
pub async fn show_index(store: web::Data<DieselStore>) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    if session.is_agent() {
        redirect("/dashboard")
    } else {
        redirect("/shop")
    }
}

#[get("/shop")]
pub async fn show_shop(
    params: web::Query<shop::ShopQuery>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match shop::load_shop_page(catalog.get_ref(), store.get_ref(), &session, params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &session, "shop");
            context.insert("products", &data.products);
            context.insert("total", &data.total);
            context.insert("visible", &data.visible);
            context.insert("next_visible", &data.next_visible);
            context.insert("search", &data.search);
            context.insert("cart_count", &data.cart_count);
            render_template(&tera, "shop/index.html", &context)
        }
        // Agents manage their catalog instead of browsing it.
        Err(ServiceError::Unauthorized) => redirect("/dashboard"),
        Err(err) => {
            log::error!("Failed to load the shop page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/shop/{product_id}")]
pub async fn show_product(
    path: web::Path<i32>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = path.into_inner();
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match shop::load_product_page(catalog.get_ref(), store.get_ref(), product_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &session, "shop");
            context.insert("product", &data.product);
            context.insert("price_formatted", &data.price_formatted);
            context.insert("favorite", &data.favorite);
            render_template(&tera, "shop/detail.html", &context)
        }
        // Unknown ids get the dedicated not-found page, not a crash.
        Err(ServiceError::NotFound) => {
            let context = base_context(&flash_messages, &session, "shop");
            match tera.render("shop/not_found.html", &context) {
                Ok(body) => HttpResponse::NotFound()
                    .content_type(actix_web::http::header::ContentType::html())
                    .body(body),
                Err(err) => {
                    log::error!("Failed to render shop/not_found.html: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/shop/{product_id}/cart")]
pub async fn add_product_to_cart(
    path: web::Path<i32>,
    form: web::Form<AddToCartForm>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
) -> impl Responder {
    let product_id = path.into_inner();
    let form = form.into_inner();

    match shop::add_variant_to_cart(
        catalog.get_ref(),
        store.get_ref(),
        product_id,
        &form.color,
        &form.size,
        form.quantity,
    ) {
        Ok(name) => {
            FlashMessage::success(format!("{name} has been added to your bag.")).send();
            redirect(&format!("/shop/{product_id}"))
        }
        Err(ServiceError::NotFound) => redirect("/shop"),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/shop/{product_id}"))
        }
        Err(err) => {
            log::error!("Failed to add product {product_id} to the bag: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/shop/{product_id}/quick-add")]
pub async fn quick_add_product(
    path: web::Path<i32>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
) -> impl Responder {
    let product_id = path.into_inner();

    match shop::quick_add_to_cart(catalog.get_ref(), store.get_ref(), product_id) {
        Ok(name) => {
            FlashMessage::success(format!("{name} has been added to your bag.")).send();
            redirect("/shop")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That product is no longer available.").send();
            redirect("/shop")
        }
        Err(err) => {
            log::error!("Failed to quick-add product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/shop/{product_id}/favorite")]
pub async fn toggle_favorite(
    path: web::Path<i32>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
) -> impl Responder {
    let product_id = path.into_inner();

    match shop::toggle_favorite(catalog.get_ref(), store.get_ref(), product_id) {
        Ok(toggle) => {
            let message = if toggle.added {
                format!("{} has been added to your favorites.", toggle.name)
            } else {
                format!("{} has been removed from your favorites.", toggle.name)
            };
            FlashMessage::success(message).send();
            redirect("/shop")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That product is no longer available.").send();
            redirect("/shop")
        }
        Err(err) => {
            log::error!("Failed to toggle favorite {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

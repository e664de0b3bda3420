use actix_session::Session as CookieSession;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::checkout::CheckoutForm;
use crate::repository::DieselStore;
use crate::routes::{
    DISCOUNT_SESSION_KEY, active_discount, base_context, load_session, redirect, render_template,
};
use crate::services::{ServiceError, checkout, format_cents};

#[get("/checkout")]
pub async fn show_checkout(
    store: web::Data<DieselStore>,
    session_state: CookieSession,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };
    let discount = active_discount(&session_state);

    match checkout::load_checkout_page(store.get_ref(), discount) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &session, "checkout");
            context.insert("items", &data.items);
            context.insert("breakdown", &data.breakdown);
            render_template(&tera, "checkout/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the checkout page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/checkout")]
pub async fn place_order(
    form: web::Form<CheckoutForm>,
    store: web::Data<DieselStore>,
    session_state: CookieSession,
) -> impl Responder {
    let discount = active_discount(&session_state);

    match checkout::place_order(store.get_ref(), &form, discount) {
        Ok(receipt) => {
            // The cart instance is gone; its discount goes with it.
            session_state.remove(DISCOUNT_SESSION_KEY);
            FlashMessage::success(format!(
                "Order placed successfully. You were charged ${}.",
                format_cents(receipt.total_cents)
            ))
            .send();
            redirect("/shop")
        }
        Err(ServiceError::EmptyCart) => {
            FlashMessage::warning("You need to add items to your bag before checking out.").send();
            redirect("/checkout")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/checkout")
        }
        Err(err) => {
            log::error!("Failed to place order: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

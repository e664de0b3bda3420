use std::time::Duration;

use actix_session::Session as CookieSession;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::forms::cart::{ApplyCouponForm, RemoveLineForm, UpdateQuantityForm};
use crate::repository::DieselStore;
use crate::routes::{
    active_discount, base_context, load_session, redirect, render_template, set_discount,
};
use crate::services::{ServiceError, cart};

/// Stand-in latency for the remote coupon validation the demo does not have.
const COUPON_VALIDATION_DELAY: Duration = Duration::from_millis(400);

#[get("/cart")]
pub async fn show_cart(
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

    match cart::load_cart_page(store.get_ref(), discount) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &session, "cart");
            context.insert("items", &data.items);
            context.insert("breakdown", &data.breakdown);
            context.insert("discount_percent", &data.discount_percent);
            render_template(&tera, "cart/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the cart page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/cart/quantity")]
pub async fn update_quantity(
    form: web::Form<UpdateQuantityForm>,
    store: web::Data<DieselStore>,
) -> impl Responder {
    let form = form.into_inner();

    match cart::change_quantity(store.get_ref(), form.index, form.quantity) {
        Ok(()) => redirect("/cart"),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That bag item no longer exists.").send();
            redirect("/cart")
        }
        Err(err) => {
            log::error!("Failed to update bag quantity: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/cart/remove")]
pub async fn remove_line(
    form: web::Form<RemoveLineForm>,
    store: web::Data<DieselStore>,
) -> impl Responder {
    match cart::remove_item(store.get_ref(), form.index) {
        Ok(name) => {
            FlashMessage::success(format!("{name} has been removed from your bag.")).send();
            redirect("/cart")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That bag item no longer exists.").send();
            redirect("/cart")
        }
        Err(err) => {
            log::error!("Failed to remove bag line: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/cart/coupon")]
pub async fn apply_coupon(
    form: web::Form<ApplyCouponForm>,
    session_state: CookieSession,
) -> impl Responder {
    let form = form.into_inner();
    if form.validate().is_err() {
        set_discount(&session_state, 0);
        FlashMessage::error("Invalid coupon code").send();
        return redirect("/cart");
    }

    // Single suspension point standing in for a validation round trip. Each
    // submission overwrites the whole discount value afterwards, so when a
    // shopper re-submits while a check is pending, the latest result wins.
    actix_web::rt::time::sleep(COUPON_VALIDATION_DELAY).await;

    match cart::apply_coupon(&form.code) {
        Ok(percent) => {
            set_discount(&session_state, percent);
            FlashMessage::success(format!("Coupon applied: {percent}% off.")).send();
        }
        Err(ServiceError::InvalidCoupon) => {
            set_discount(&session_state, 0);
            FlashMessage::error("Invalid coupon code").send();
        }
        Err(err) => {
            log::error!("Failed to apply coupon: {err}");
            FlashMessage::error("Invalid coupon code").send();
        }
    }

    redirect("/cart")
}

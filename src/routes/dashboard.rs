use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::product::Category;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{DieselStore, InMemoryCatalog};
use crate::routes::{base_context, load_session, redirect, render_template};
use crate::services::{ServiceError, dashboard};

#[get("/dashboard")]
pub async fn show_dashboard(
    params: web::Query<dashboard::DashboardQuery>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match dashboard::load_dashboard_page(catalog.get_ref(), &session, params.0) {
        Ok(data) => {
            let categories: Vec<String> = Category::ALL
                .iter()
                .map(|category| category.to_string())
                .collect();

            let mut context = base_context(&flash_messages, &session, "dashboard");
            context.insert("products", &data.products);
            context.insert("summary", &data.summary);
            context.insert("search", &data.search);
            context.insert("category", &data.category);
            context.insert("status", &data.status);
            context.insert("sort", &data.sort);
            context.insert("categories", &categories);
            render_template(&tera, "dashboard/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::warning("The dashboard is for seller accounts.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/dashboard")
        }
        Err(err) => {
            log::error!("Failed to load the dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/dashboard/products")]
pub async fn add_product(
    form: web::Form<AddProductForm>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match dashboard::create_product(catalog.get_ref(), &session, form.into_inner()) {
        Ok(product) => {
            FlashMessage::success(format!("{} has been listed.", product.name)).send();
            redirect("/dashboard")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::warning("The dashboard is for seller accounts.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/dashboard")
        }
        Err(err) => {
            log::error!("Failed to list product: {err}");
            FlashMessage::error("The product could not be listed.").send();
            redirect("/dashboard")
        }
    }
}

#[post("/dashboard/products/edit")]
pub async fn edit_product(
    form: web::Form<EditProductForm>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
) -> impl Responder {
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match dashboard::modify_product(catalog.get_ref(), &session, form.into_inner()) {
        Ok(product) => {
            FlashMessage::success(format!("{} has been updated.", product.name)).send();
            redirect("/dashboard")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::warning("The dashboard is for seller accounts.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That product no longer exists.").send();
            redirect("/dashboard")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/dashboard")
        }
        Err(err) => {
            log::error!("Failed to update product: {err}");
            FlashMessage::error("The product could not be updated.").send();
            redirect("/dashboard")
        }
    }
}

#[post("/dashboard/products/{product_id}/delete")]
pub async fn delete_product(
    path: web::Path<i32>,
    store: web::Data<DieselStore>,
    catalog: web::Data<InMemoryCatalog>,
) -> impl Responder {
    let product_id = path.into_inner();
    let session = match load_session(store.get_ref()) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match dashboard::remove_product(catalog.get_ref(), &session, product_id) {
        Ok(()) => {
            FlashMessage::success("The product has been removed.").send();
            redirect("/dashboard")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::warning("The dashboard is for seller accounts.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That product no longer exists.").send();
            redirect("/dashboard")
        }
        Err(err) => {
            log::error!("Failed to delete product {product_id}: {err}");
            FlashMessage::error("The product could not be removed.").send();
            redirect("/dashboard")
        }
    }
}

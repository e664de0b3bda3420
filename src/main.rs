use std::env;

use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use luxe_storefront::db::establish_connection_pool;
use luxe_storefront::fixtures;
use luxe_storefront::repository::{DieselStore, InMemoryCatalog};
use luxe_storefront::routes::auth_pages::{login, logout, register, show_login, show_register};
use luxe_storefront::routes::cart::{apply_coupon, remove_line, show_cart, update_quantity};
use luxe_storefront::routes::checkout::{place_order, show_checkout};
use luxe_storefront::routes::dashboard::{
    add_product, delete_product, edit_product, show_dashboard,
};
use luxe_storefront::routes::favorites::{
    move_favorite_to_cart, remove_favorite, show_favorites,
};
use luxe_storefront::routes::orders::{reorder, show_orders, write_review};
use luxe_storefront::routes::profile::{save_profile, show_profile};
use luxe_storefront::routes::shop::{
    add_product_to_cart, quick_add_product, show_index, show_product, show_shop, toggle_favorite,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("store.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let store = DieselStore::new(pool);
    let catalog = InMemoryCatalog::with_products(fixtures::seed_products());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(show_shop)
            .service(show_product)
            .service(add_product_to_cart)
            .service(quick_add_product)
            .service(toggle_favorite)
            .service(show_cart)
            .service(update_quantity)
            .service(remove_line)
            .service(apply_coupon)
            .service(show_checkout)
            .service(place_order)
            .service(show_favorites)
            .service(remove_favorite)
            .service(move_favorite_to_cart)
            .service(show_orders)
            .service(reorder)
            .service(write_review)
            .service(show_profile)
            .service(save_profile)
            .service(show_login)
            .service(login)
            .service(show_register)
            .service(register)
            .service(logout)
            .service(show_dashboard)
            .service(add_product)
            .service(edit_product)
            .service(delete_product)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(catalog.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}

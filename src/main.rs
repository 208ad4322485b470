use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use vitrina::db::establish_connection_pool;
use vitrina::repository::DieselRepository;
use vitrina::routes::{catalog, categories, collections, colors, content, products, technologies};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let default_database_url = match app_env.as_str() {
        "production" => "/var/lib/vitrina/vitrina.db",
        _ => "vitrina-dev.db",
    };
    let database_url = env::var("DATABASE_URL").unwrap_or(default_database_url.to_string());

    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    log::info!("Starting vitrina on {address}:{port} ({app_env})");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api/v1")
                    // Storefront reads.
                    .service(catalog::list_catalog_products)
                    .service(catalog::get_catalog_product)
                    .service(catalog::get_related_products)
                    .service(catalog::get_cross_collection_products)
                    .service(categories::list_categories)
                    .service(collections::list_collections)
                    .service(collections::get_collection)
                    .service(content::get_hero_section)
                    .service(content::get_brand_page)
                    .service(content::get_directions)
                    // Back-office mutations.
                    .service(categories::add_category)
                    .service(categories::edit_category)
                    .service(categories::delete_category)
                    .service(products::list_products)
                    .service(products::get_product)
                    .service(products::add_product)
                    .service(products::edit_product)
                    .service(products::delete_product)
                    .service(products::replace_product_colors)
                    .service(products::replace_characteristics)
                    .service(products::replace_product_technologies)
                    .service(products::replace_documents)
                    .service(products::upload_products)
                    .service(colors::list_colors)
                    .service(colors::add_color)
                    .service(colors::edit_color)
                    .service(colors::delete_color)
                    .service(technologies::list_technologies)
                    .service(technologies::add_technology)
                    .service(technologies::edit_technology)
                    .service(technologies::delete_technology)
                    .service(collections::add_collection)
                    .service(collections::edit_collection)
                    .service(collections::delete_collection)
                    .service(collections::upsert_collection_page)
                    .service(collections::delete_collection_page)
                    .service(content::save_hero_section)
                    .service(content::save_brand_hero_section)
                    .service(content::add_brand_content)
                    .service(content::edit_brand_content)
                    .service(content::delete_brand_content)
                    .service(content::add_direction)
                    .service(content::edit_direction)
                    .service(content::delete_direction),
            )
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}

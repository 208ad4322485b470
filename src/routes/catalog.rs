use actix_web::{Responder, get, web};
use serde::Deserialize;

use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, not_found_response, service_error_response};
use crate::services::catalog::{self, CatalogRequest};

/// Query string for the related-products lookups.
#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub lang: Option<String>,
    pub limit: Option<i64>,
}

#[get("/catalog/products")]
pub async fn list_catalog_products(
    params: web::Query<CatalogRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog::get_catalog_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => ApiResponse::ok(page),
        Err(err) => service_error_response(err, "catalog"),
    }
}

#[get("/catalog/products/{id}")]
pub async fn get_catalog_product(
    path: web::Path<i32>,
    params: web::Query<crate::routes::LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match catalog::get_product_detail(repo.get_ref(), product_id, params.lang()) {
        Ok(Some(detail)) => ApiResponse::ok(detail),
        Ok(None) => not_found_response("product"),
        Err(err) => service_error_response(err, "product"),
    }
}

#[get("/catalog/products/{id}/related")]
pub async fn get_related_products(
    path: web::Path<i32>,
    params: web::Query<RelatedQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();
    let lang = params.lang.as_deref().unwrap_or(crate::DEFAULT_LANG);

    match catalog::get_related_products(repo.get_ref(), product_id, lang, params.limit) {
        Ok(related) => ApiResponse::ok(related),
        Err(err) => service_error_response(err, "product"),
    }
}

#[get("/catalog/products/{id}/cross-collection")]
pub async fn get_cross_collection_products(
    path: web::Path<i32>,
    params: web::Query<RelatedQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();
    let lang = params.lang.as_deref().unwrap_or(crate::DEFAULT_LANG);

    match catalog::get_cross_collection_products(repo.get_ref(), product_id, lang, params.limit) {
        Ok(related) => ApiResponse::ok(related),
        Err(err) => service_error_response(err, "product"),
    }
}

use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::collections::{
    AddCollectionForm, EditCollectionForm, UpsertCollectionPageForm,
};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, LangQuery, not_found_response, service_error_response};
use crate::services::collections;

#[get("/collections")]
pub async fn list_collections(repo: web::Data<DieselRepository>) -> impl Responder {
    match collections::load_collections(repo.get_ref()) {
        Ok(items) => ApiResponse::ok(items),
        Err(err) => service_error_response(err, "collections"),
    }
}

#[get("/collections/{slug}")]
pub async fn get_collection(
    path: web::Path<String>,
    params: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let slug = path.into_inner();

    match collections::load_collection_view(repo.get_ref(), &slug, params.lang()) {
        Ok(Some(view)) => ApiResponse::ok(view),
        Ok(None) => not_found_response("collection"),
        Err(err) => service_error_response(err, "collection"),
    }
}

#[post("/admin/collections")]
pub async fn add_collection(
    form: web::Json<AddCollectionForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match collections::create_collection(repo.get_ref(), form.into_inner()) {
        Ok(collection) => ApiResponse::created(collection),
        Err(err) => service_error_response(err, "collection"),
    }
}

#[put("/admin/collections/{id}")]
pub async fn edit_collection(
    path: web::Path<i32>,
    form: web::Json<EditCollectionForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match collections::modify_collection(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(collection) => ApiResponse::ok(collection),
        Err(err) => service_error_response(err, "collection"),
    }
}

#[delete("/admin/collections/{id}")]
pub async fn delete_collection(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let collection_id = path.into_inner();

    match collections::remove_collection(repo.get_ref(), collection_id) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "deleted": collection_id })),
        Err(err) => service_error_response(err, "collection"),
    }
}

#[put("/admin/collections/{id}/page")]
pub async fn upsert_collection_page(
    path: web::Path<i32>,
    form: web::Json<UpsertCollectionPageForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match collections::upsert_collection_page(repo.get_ref(), path.into_inner(), form.into_inner())
    {
        Ok(page) => ApiResponse::ok(page),
        Err(err) => service_error_response(err, "collection"),
    }
}

#[delete("/admin/collections/{id}/page/{lang}")]
pub async fn delete_collection_page(
    path: web::Path<(i32, String)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (collection_id, lang) = path.into_inner();

    match collections::remove_collection_page(repo.get_ref(), collection_id, &lang) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "deleted": lang })),
        Err(err) => service_error_response(err, "collection page"),
    }
}

use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::technologies::{AddTechnologyForm, EditTechnologyForm};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, service_error_response};
use crate::services::technologies;

#[get("/admin/technologies")]
pub async fn list_technologies(repo: web::Data<DieselRepository>) -> impl Responder {
    match technologies::load_technologies(repo.get_ref()) {
        Ok(items) => ApiResponse::ok(items),
        Err(err) => service_error_response(err, "technologies"),
    }
}

#[post("/admin/technologies")]
pub async fn add_technology(
    form: web::Json<AddTechnologyForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match technologies::create_technology(repo.get_ref(), form.into_inner()) {
        Ok(technology) => ApiResponse::created(technology),
        Err(err) => service_error_response(err, "technology"),
    }
}

#[put("/admin/technologies/{id}")]
pub async fn edit_technology(
    path: web::Path<i32>,
    form: web::Json<EditTechnologyForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match technologies::modify_technology(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(technology) => ApiResponse::ok(technology),
        Err(err) => service_error_response(err, "technology"),
    }
}

#[delete("/admin/technologies/{id}")]
pub async fn delete_technology(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let technology_id = path.into_inner();

    match technologies::remove_technology(repo.get_ref(), technology_id) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "deleted": technology_id })),
        Err(err) => service_error_response(err, "technology"),
    }
}

use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::colors::{AddColorForm, EditColorForm};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, service_error_response};
use crate::services::colors;

#[get("/admin/colors")]
pub async fn list_colors(repo: web::Data<DieselRepository>) -> impl Responder {
    match colors::load_colors(repo.get_ref()) {
        Ok(items) => ApiResponse::ok(items),
        Err(err) => service_error_response(err, "colors"),
    }
}

#[post("/admin/colors")]
pub async fn add_color(
    form: web::Json<AddColorForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match colors::create_color(repo.get_ref(), form.into_inner()) {
        Ok(color) => ApiResponse::created(color),
        Err(err) => service_error_response(err, "color"),
    }
}

#[put("/admin/colors/{id}")]
pub async fn edit_color(
    path: web::Path<i32>,
    form: web::Json<EditColorForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match colors::modify_color(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(color) => ApiResponse::ok(color),
        Err(err) => service_error_response(err, "color"),
    }
}

#[delete("/admin/colors/{id}")]
pub async fn delete_color(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let color_id = path.into_inner();

    match colors::remove_color(repo.get_ref(), color_id) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "deleted": color_id })),
        Err(err) => service_error_response(err, "color"),
    }
}

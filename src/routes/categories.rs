use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, LangQuery, service_error_response};
use crate::services::categories;

#[get("/categories")]
pub async fn list_categories(
    params: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::load_category_tree(repo.get_ref(), Some(params.lang().to_string())) {
        Ok(tree) => ApiResponse::ok(tree),
        Err(err) => service_error_response(err, "categories"),
    }
}

#[post("/admin/categories")]
pub async fn add_category(
    form: web::Json<AddCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => ApiResponse::created(category),
        Err(err) => service_error_response(err, "category"),
    }
}

#[put("/admin/categories/{id}")]
pub async fn edit_category(
    path: web::Path<i32>,
    form: web::Json<EditCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::modify_category(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(category) => ApiResponse::ok(category),
        Err(err) => service_error_response(err, "category"),
    }
}

#[delete("/admin/categories/{id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match categories::remove_category(repo.get_ref(), category_id) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "deleted": category_id })),
        Err(err) => service_error_response(err, "category"),
    }
}

use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::content::{
    AddBrandContentForm, AddDirectionForm, EditBrandContentForm, EditDirectionForm,
    HeroSectionForm,
};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, LangQuery, service_error_response};
use crate::services::content;

#[get("/content/hero")]
pub async fn get_hero_section(
    params: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::load_hero_section(repo.get_ref(), params.lang()) {
        Ok(hero) => ApiResponse::ok(hero),
        Err(err) => service_error_response(err, "hero section"),
    }
}

#[get("/content/brand")]
pub async fn get_brand_page(
    params: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::load_brand_page(repo.get_ref(), params.lang()) {
        Ok(data) => ApiResponse::ok(data),
        Err(err) => service_error_response(err, "brand page"),
    }
}

#[get("/content/directions")]
pub async fn get_directions(
    params: web::Query<LangQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::load_directions(repo.get_ref(), params.lang()) {
        Ok(items) => ApiResponse::ok(items),
        Err(err) => service_error_response(err, "directions"),
    }
}

#[put("/admin/content/hero")]
pub async fn save_hero_section(
    form: web::Json<HeroSectionForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::save_hero_section(repo.get_ref(), form.into_inner()) {
        Ok(hero) => ApiResponse::ok(hero),
        Err(err) => service_error_response(err, "hero section"),
    }
}

#[put("/admin/content/brand-hero")]
pub async fn save_brand_hero_section(
    form: web::Json<HeroSectionForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::save_brand_hero_section(repo.get_ref(), form.into_inner()) {
        Ok(hero) => ApiResponse::ok(hero),
        Err(err) => service_error_response(err, "brand hero section"),
    }
}

#[post("/admin/content/brand")]
pub async fn add_brand_content(
    form: web::Json<AddBrandContentForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::create_brand_content(repo.get_ref(), form.into_inner()) {
        Ok(block) => ApiResponse::created(block),
        Err(err) => service_error_response(err, "brand content"),
    }
}

#[put("/admin/content/brand/{id}")]
pub async fn edit_brand_content(
    path: web::Path<i32>,
    form: web::Json<EditBrandContentForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::modify_brand_content(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(block) => ApiResponse::ok(block),
        Err(err) => service_error_response(err, "brand content"),
    }
}

#[delete("/admin/content/brand/{id}")]
pub async fn delete_brand_content(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let content_id = path.into_inner();

    match content::remove_brand_content(repo.get_ref(), content_id) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "deleted": content_id })),
        Err(err) => service_error_response(err, "brand content"),
    }
}

#[post("/admin/content/directions")]
pub async fn add_direction(
    form: web::Json<AddDirectionForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::create_direction(repo.get_ref(), form.into_inner()) {
        Ok(direction) => ApiResponse::created(direction),
        Err(err) => service_error_response(err, "direction"),
    }
}

#[put("/admin/content/directions/{id}")]
pub async fn edit_direction(
    path: web::Path<i32>,
    form: web::Json<EditDirectionForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match content::modify_direction(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(direction) => ApiResponse::ok(direction),
        Err(err) => service_error_response(err, "direction"),
    }
}

#[delete("/admin/content/directions/{id}")]
pub async fn delete_direction(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let direction_id = path.into_inner();

    match content::remove_direction(repo.get_ref(), direction_id) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "deleted": direction_id })),
        Err(err) => service_error_response(err, "direction"),
    }
}

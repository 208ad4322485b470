use std::io::Read;

use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{
    AddProductForm, CharacteristicsForm, DocumentsForm, EditProductForm, ProductColorsForm,
    ProductTechnologiesForm, UploadProductsForm,
};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, service_error_response};
use crate::services::products::{self, ProductsAdminQuery};

/// Multipart payload carrying the product CSV.
#[derive(Debug, MultipartForm)]
pub struct CsvUploadForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

#[get("/admin/products")]
pub async fn list_products(
    params: web::Query<ProductsAdminQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::load_products_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => ApiResponse::ok(page),
        Err(err) => service_error_response(err, "products"),
    }
}

#[get("/admin/products/{id}")]
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::load_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => ApiResponse::ok(product),
        Err(err) => service_error_response(err, "product"),
    }
}

#[post("/admin/products")]
pub async fn add_product(
    form: web::Json<AddProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => ApiResponse::created(product),
        Err(err) => service_error_response(err, "product"),
    }
}

#[put("/admin/products/{id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    form: web::Json<EditProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::modify_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => ApiResponse::ok(product),
        Err(err) => service_error_response(err, "product"),
    }
}

#[delete("/admin/products/{id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::remove_product(repo.get_ref(), product_id) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "deleted": product_id })),
        Err(err) => service_error_response(err, "product"),
    }
}

#[put("/admin/products/{id}/colors")]
pub async fn replace_product_colors(
    path: web::Path<i32>,
    form: web::Json<ProductColorsForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::replace_product_colors(repo.get_ref(), product_id, form.into_inner()) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "product_id": product_id })),
        Err(err) => service_error_response(err, "product"),
    }
}

#[put("/admin/products/{id}/characteristics")]
pub async fn replace_characteristics(
    path: web::Path<i32>,
    form: web::Json<CharacteristicsForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::replace_characteristics(repo.get_ref(), product_id, form.into_inner()) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "product_id": product_id })),
        Err(err) => service_error_response(err, "product"),
    }
}

#[put("/admin/products/{id}/technologies")]
pub async fn replace_product_technologies(
    path: web::Path<i32>,
    form: web::Json<ProductTechnologiesForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::replace_product_technologies(repo.get_ref(), product_id, form.into_inner()) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "product_id": product_id })),
        Err(err) => service_error_response(err, "product"),
    }
}

#[put("/admin/products/{id}/documents")]
pub async fn replace_documents(
    path: web::Path<i32>,
    form: web::Json<DocumentsForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::replace_documents(repo.get_ref(), product_id, form.into_inner()) {
        Ok(()) => ApiResponse::ok(serde_json::json!({ "product_id": product_id })),
        Err(err) => service_error_response(err, "product"),
    }
}

#[post("/admin/products/upload")]
pub async fn upload_products(
    MultipartForm(form): MultipartForm<CsvUploadForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let file_name = form.csv.file_name.clone();

    let mut bytes = Vec::with_capacity(form.csv.size);
    let mut file = match form.csv.file.reopen() {
        Ok(file) => file,
        Err(err) => {
            log::error!("failed to reopen uploaded csv: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if let Err(err) = file.read_to_end(&mut bytes) {
        log::error!("failed to read uploaded csv: {err}");
        return HttpResponse::InternalServerError().finish();
    }

    let upload = UploadProductsForm::new(file_name, bytes);

    match products::import_products(repo.get_ref(), upload) {
        Ok(created) => ApiResponse::ok(serde_json::json!({ "created": created })),
        Err(err) => service_error_response(err, "products"),
    }
}

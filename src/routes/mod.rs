use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_LANG;
use crate::services::ServiceError;

pub mod catalog;
pub mod categories;
pub mod collections;
pub mod colors;
pub mod content;
pub mod products;
pub mod technologies;

/// Uniform envelope wrapping every endpoint's payload.
///
/// Errors carry a human-readable message only; callers branch on the HTTP
/// status, not on error codes.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with `data`.
    pub fn ok(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    /// 201 with `data`.
    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

fn failure(message: impl Into<String>) -> ApiResponse<()> {
    ApiResponse {
        success: false,
        data: None,
        error: Some(message.into()),
    }
}

/// Map a service failure onto the envelope with the matching status code.
///
/// `what` names the addressed record for the not-found message; repository
/// failures are logged and hidden behind a generic message.
pub(crate) fn service_error_response(err: ServiceError, what: &str) -> HttpResponse {
    match err {
        ServiceError::Form(message) => HttpResponse::BadRequest().json(failure(message)),
        ServiceError::Conflict(message) => HttpResponse::Conflict().json(failure(message)),
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(failure(format!("{what} not found")))
        }
        ServiceError::Repository(err) => {
            log::error!("{what}: {err}");
            HttpResponse::InternalServerError().json(failure("internal error"))
        }
    }
}

pub(crate) fn not_found_response(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(failure(format!("{what} not found")))
}

/// Query string carrying just a language choice.
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }
}

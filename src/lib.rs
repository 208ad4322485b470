pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Language served when a storefront request does not name one.
pub const DEFAULT_LANG: &str = "ru";

//! HTTP inbound adapter exposing the roster REST endpoints.

pub mod courses;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod students;
pub mod teachers;
pub mod validation;

use serde::Serialize;

pub use error::ApiResult;

/// Success envelope wrapping every 2xx payload as `{ "data": ... }`.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

//! API request handlers

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::extract::{ApiJson, ApiPath};

// Request bodies

#[derive(Debug, Deserialize, ToSchema)]
pub struct InsertPersonRequest {
    /// Person's name
    pub name: String,
    /// Age in years
    pub age: i64,
    /// Home address
    pub address: String,
    /// Salary figure
    pub salary: f64,
}

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub msg: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Accept a person record and report the projected age
#[utoipa::path(
    post,
    path = "/insert",
    request_body = InsertPersonRequest,
    responses(
        (status = 200, description = "Person accepted", body = MessageResponse),
        (status = 422, description = "Missing or mistyped field", body = ErrorResponse)
    ),
    tag = "people"
)]
pub async fn insert_person(
    ApiJson(person): ApiJson<InsertPersonRequest>,
) -> Json<MessageResponse> {
    let age_after_10_years = person.age + 10;

    Json(MessageResponse {
        success: true,
        msg: format!(
            "此人名字叫做：{}，十年后此人年龄：{}",
            person.name, age_after_10_years
        ),
    })
}

/// Echo back a queried identifier
#[utoipa::path(
    get,
    path = "/query/{uid}",
    params(
        ("uid" = i64, Path, description = "Identifier to look up")
    ),
    responses(
        (status = 200, description = "Identifier echoed", body = MessageResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse)
    ),
    tag = "people"
)]
pub async fn query_person(ApiPath(uid): ApiPath<i64>) -> Json<MessageResponse> {
    Json(MessageResponse {
        success: true,
        msg: format!("你查询的 uid 为：{}", uid),
    })
}

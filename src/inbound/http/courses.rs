//! Course HTTP handlers.
//!
//! ```text
//! GET    /v1/courses
//! POST   /v1/courses
//! GET    /v1/courses/{id}
//! PUT    /v1/courses/{id}
//! DELETE /v1/courses/{id}
//! ```
//!
//! Course payloads carry scalar fields only. Rosters are edited through the
//! student and teacher endpoints, which keep both sides consistent.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::course::{CourseUpdate, NewCourse};
use crate::domain::ids::CourseId;
use crate::domain::Error;
use crate::inbound::http::schemas::{CourseEnvelope, CourseListEnvelope, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_course_description, parse_course_name, parse_uuid,
};
use crate::inbound::http::{ApiResult, DataEnvelope};

const NAME: FieldName = FieldName::new("name");
const DESCRIPTION: FieldName = FieldName::new("description");
const ID: FieldName = FieldName::new("id");

/// Request payload for creating or updating a course.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

fn parse_new_course(payload: CoursePayload) -> Result<NewCourse, Error> {
    let name = payload.name.ok_or_else(|| missing_field_error(NAME))?;
    let description = payload
        .description
        .ok_or_else(|| missing_field_error(DESCRIPTION))?;

    Ok(NewCourse {
        name: parse_course_name(name, NAME)?,
        description: parse_course_description(description, DESCRIPTION)?,
    })
}

fn parse_course_update(payload: CoursePayload) -> Result<CourseUpdate, Error> {
    Ok(CourseUpdate {
        name: payload
            .name
            .map(|value| parse_course_name(value, NAME))
            .transpose()?,
        description: payload
            .description
            .map(|value| parse_course_description(value, DESCRIPTION))
            .transpose()?,
    })
}

fn parse_course_id(raw: &str) -> Result<CourseId, Error> {
    parse_uuid(raw, ID).map(CourseId::from_uuid)
}

/// List all courses.
#[utoipa::path(
    get,
    path = "/v1/courses",
    responses(
        (status = 200, description = "All courses", body = CourseListEnvelope),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let courses = state.courses_query.list().await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: courses }))
}

/// Fetch one course.
#[utoipa::path(
    get,
    path = "/v1/courses/{id}",
    params(("id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "The course", body = CourseEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Course not found", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_course_id(&path.into_inner())?;
    let course = state.courses_query.get(id).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: course }))
}

/// Create a course with empty rosters.
#[utoipa::path(
    post,
    path = "/v1/courses",
    request_body = CoursePayload,
    responses(
        (status = 201, description = "Created course", body = CourseEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CoursePayload>,
) -> ApiResult<HttpResponse> {
    let new = parse_new_course(payload.into_inner())?;
    let course = state.courses.create(new).await?;
    Ok(HttpResponse::Created().json(DataEnvelope { data: course }))
}

/// Update a course's name or description.
#[utoipa::path(
    put,
    path = "/v1/courses/{id}",
    params(("id" = String, Path, description = "Course identifier")),
    request_body = CoursePayload,
    responses(
        (status = 200, description = "Updated course", body = CourseEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Course not found", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "updateCourse"
)]
#[put("/courses/{id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CoursePayload>,
) -> ApiResult<HttpResponse> {
    let id = parse_course_id(&path.into_inner())?;
    let update = parse_course_update(payload.into_inner())?;
    let course = state.courses.update(id, update).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: course }))
}

/// Delete a course and strip it from every student and teacher.
#[utoipa::path(
    delete,
    path = "/v1/courses/{id}",
    params(("id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Deleted course", body = CourseEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Course not found", body = ErrorSchema),
        (status = 500, description = "Reference sweep failed", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "deleteCourse"
)]
#[delete("/courses/{id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_course_id(&path.into_inner())?;
    let course = state.courses.delete(id).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: course }))
}

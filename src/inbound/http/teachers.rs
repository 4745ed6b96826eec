//! Teacher HTTP handlers.
//!
//! ```text
//! GET    /v1/teachers
//! POST   /v1/teachers
//! GET    /v1/teachers/{id}
//! PUT    /v1/teachers/{id}
//! DELETE /v1/teachers/{id}
//! PUT    /v1/teachers/{id}/courses/{courseId}
//! DELETE /v1/teachers/{id}/courses/{courseId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ids::{CourseId, TeacherId};
use crate::domain::teacher::{NewTeacher, TeacherUpdate};
use crate::domain::Error;
use crate::inbound::http::schemas::{ErrorSchema, TeacherEnvelope, TeacherListEnvelope};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_course_id_list, parse_email, parse_person_name,
    parse_uuid,
};
use crate::inbound::http::{ApiResult, DataEnvelope};

const FIRST_NAME: FieldName = FieldName::new("firstName");
const LAST_NAME: FieldName = FieldName::new("lastName");
const EMAIL: FieldName = FieldName::new("email");
const COURSES: FieldName = FieldName::new("courses");
const ID: FieldName = FieldName::new("id");
const COURSE_ID: FieldName = FieldName::new("courseId");

/// Request payload for creating or updating a teacher.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Course identifiers; on update this replaces the whole set.
    pub courses: Option<Vec<String>>,
}

fn parse_new_teacher(payload: TeacherPayload) -> Result<NewTeacher, Error> {
    let first_name = payload
        .first_name
        .ok_or_else(|| missing_field_error(FIRST_NAME))?;
    let last_name = payload
        .last_name
        .ok_or_else(|| missing_field_error(LAST_NAME))?;
    let email = payload.email.ok_or_else(|| missing_field_error(EMAIL))?;
    let courses = payload.courses.unwrap_or_default();

    Ok(NewTeacher {
        first_name: parse_person_name(first_name, FIRST_NAME)?,
        last_name: parse_person_name(last_name, LAST_NAME)?,
        email: parse_email(email, EMAIL)?,
        courses: parse_course_id_list(courses, COURSES)?,
    })
}

fn parse_teacher_update(payload: TeacherPayload) -> Result<TeacherUpdate, Error> {
    Ok(TeacherUpdate {
        first_name: payload
            .first_name
            .map(|value| parse_person_name(value, FIRST_NAME))
            .transpose()?,
        last_name: payload
            .last_name
            .map(|value| parse_person_name(value, LAST_NAME))
            .transpose()?,
        email: payload
            .email
            .map(|value| parse_email(value, EMAIL))
            .transpose()?,
        courses: payload
            .courses
            .map(|values| parse_course_id_list(values, COURSES))
            .transpose()?,
    })
}

fn parse_teacher_id(raw: &str) -> Result<TeacherId, Error> {
    parse_uuid(raw, ID).map(TeacherId::from_uuid)
}

fn parse_link_path(raw: (String, String)) -> Result<(TeacherId, CourseId), Error> {
    let id = parse_teacher_id(&raw.0)?;
    let course = parse_uuid(&raw.1, COURSE_ID).map(CourseId::from_uuid)?;
    Ok((id, course))
}

/// List all teachers.
#[utoipa::path(
    get,
    path = "/v1/teachers",
    responses(
        (status = 200, description = "All teachers", body = TeacherListEnvelope),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["teachers"],
    operation_id = "listTeachers"
)]
#[get("/teachers")]
pub async fn list_teachers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let teachers = state.teachers_query.list().await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: teachers }))
}

/// Fetch one teacher.
#[utoipa::path(
    get,
    path = "/v1/teachers/{id}",
    params(("id" = String, Path, description = "Teacher identifier")),
    responses(
        (status = 200, description = "The teacher", body = TeacherEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Teacher not found", body = ErrorSchema)
    ),
    tags = ["teachers"],
    operation_id = "getTeacher"
)]
#[get("/teachers/{id}")]
pub async fn get_teacher(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_teacher_id(&path.into_inner())?;
    let teacher = state.teachers_query.get(id).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: teacher }))
}

/// Create a teacher, mirroring any listed courses onto their rosters.
#[utoipa::path(
    post,
    path = "/v1/teachers",
    request_body = TeacherPayload,
    responses(
        (status = 201, description = "Created teacher", body = TeacherEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["teachers"],
    operation_id = "createTeacher"
)]
#[post("/teachers")]
pub async fn create_teacher(
    state: web::Data<HttpState>,
    payload: web::Json<TeacherPayload>,
) -> ApiResult<HttpResponse> {
    let new = parse_new_teacher(payload.into_inner())?;
    let teacher = state.teachers.create(new).await?;
    Ok(HttpResponse::Created().json(DataEnvelope { data: teacher }))
}

/// Update a teacher; a supplied course list replaces the whole set.
#[utoipa::path(
    put,
    path = "/v1/teachers/{id}",
    params(("id" = String, Path, description = "Teacher identifier")),
    request_body = TeacherPayload,
    responses(
        (status = 200, description = "Updated teacher", body = TeacherEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Teacher not found", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["teachers"],
    operation_id = "updateTeacher"
)]
#[put("/teachers/{id}")]
pub async fn update_teacher(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<TeacherPayload>,
) -> ApiResult<HttpResponse> {
    let id = parse_teacher_id(&path.into_inner())?;
    let update = parse_teacher_update(payload.into_inner())?;
    let teacher = state.teachers.update(id, update).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: teacher }))
}

/// Delete a teacher and strip it from every course roster.
#[utoipa::path(
    delete,
    path = "/v1/teachers/{id}",
    params(("id" = String, Path, description = "Teacher identifier")),
    responses(
        (status = 200, description = "Deleted teacher", body = TeacherEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Teacher not found", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["teachers"],
    operation_id = "deleteTeacher"
)]
#[delete("/teachers/{id}")]
pub async fn delete_teacher(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_teacher_id(&path.into_inner())?;
    let teacher = state.teachers.delete(id).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: teacher }))
}

/// Link a teacher and a course, updating both sides.
#[utoipa::path(
    put,
    path = "/v1/teachers/{id}/courses/{course_id}",
    params(
        ("id" = String, Path, description = "Teacher identifier"),
        ("course_id" = String, Path, description = "Course identifier")
    ),
    responses(
        (status = 200, description = "Linked teacher", body = TeacherEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Teacher or course not found", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["teachers"],
    operation_id = "linkTeacherCourse"
)]
#[put("/teachers/{id}/courses/{course_id}")]
pub async fn link_teacher_course(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (id, course) = parse_link_path(path.into_inner())?;
    let teacher = state.teachers.link_course(id, course).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: teacher }))
}

/// Unlink a teacher and a course, updating both sides.
#[utoipa::path(
    delete,
    path = "/v1/teachers/{id}/courses/{course_id}",
    params(
        ("id" = String, Path, description = "Teacher identifier"),
        ("course_id" = String, Path, description = "Course identifier")
    ),
    responses(
        (status = 200, description = "Unlinked teacher", body = TeacherEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Teacher or course not found", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["teachers"],
    operation_id = "unlinkTeacherCourse"
)]
#[delete("/teachers/{id}/courses/{course_id}")]
pub async fn unlink_teacher_course(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (id, course) = parse_link_path(path.into_inner())?;
    let teacher = state.teachers.unlink_course(id, course).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: teacher }))
}

//! Student HTTP handlers.
//!
//! ```text
//! GET    /v1/students
//! POST   /v1/students
//! GET    /v1/students/{id}
//! PUT    /v1/students/{id}
//! DELETE /v1/students/{id}
//! PUT    /v1/students/{id}/courses/{courseId}
//! DELETE /v1/students/{id}/courses/{courseId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ids::{CourseId, StudentId};
use crate::domain::student::{NewStudent, StudentUpdate};
use crate::domain::Error;
use crate::inbound::http::schemas::{ErrorSchema, StudentEnvelope, StudentListEnvelope};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_course_id_list, parse_person_name, parse_uuid,
};
use crate::inbound::http::{ApiResult, DataEnvelope};

const FIRST_NAME: FieldName = FieldName::new("firstName");
const LAST_NAME: FieldName = FieldName::new("lastName");
const COURSES: FieldName = FieldName::new("courses");
const ID: FieldName = FieldName::new("id");
const COURSE_ID: FieldName = FieldName::new("courseId");

/// Request payload for creating or updating a student.
///
/// All fields are optional at the wire level; `parse_new_student` enforces
/// the create-time requirements while updates accept any subset.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Course identifiers; on update this replaces the whole set.
    pub courses: Option<Vec<String>>,
}

fn parse_new_student(payload: StudentPayload) -> Result<NewStudent, Error> {
    let first_name = payload
        .first_name
        .ok_or_else(|| missing_field_error(FIRST_NAME))?;
    let last_name = payload
        .last_name
        .ok_or_else(|| missing_field_error(LAST_NAME))?;
    let courses = payload.courses.unwrap_or_default();

    Ok(NewStudent {
        first_name: parse_person_name(first_name, FIRST_NAME)?,
        last_name: parse_person_name(last_name, LAST_NAME)?,
        courses: parse_course_id_list(courses, COURSES)?,
    })
}

fn parse_student_update(payload: StudentPayload) -> Result<StudentUpdate, Error> {
    Ok(StudentUpdate {
        first_name: payload
            .first_name
            .map(|value| parse_person_name(value, FIRST_NAME))
            .transpose()?,
        last_name: payload
            .last_name
            .map(|value| parse_person_name(value, LAST_NAME))
            .transpose()?,
        courses: payload
            .courses
            .map(|values| parse_course_id_list(values, COURSES))
            .transpose()?,
    })
}

fn parse_student_id(raw: &str) -> Result<StudentId, Error> {
    parse_uuid(raw, ID).map(StudentId::from_uuid)
}

fn parse_link_path(raw: (String, String)) -> Result<(StudentId, CourseId), Error> {
    let id = parse_student_id(&raw.0)?;
    let course = parse_uuid(&raw.1, COURSE_ID).map(CourseId::from_uuid)?;
    Ok((id, course))
}

/// List all students.
#[utoipa::path(
    get,
    path = "/v1/students",
    responses(
        (status = 200, description = "All students", body = StudentListEnvelope),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students")]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let students = state.students_query.list().await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: students }))
}

/// Fetch one student.
#[utoipa::path(
    get,
    path = "/v1/students/{id}",
    params(("id" = String, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "The student", body = StudentEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_student_id(&path.into_inner())?;
    let student = state.students_query.get(id).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: student }))
}

/// Create a student, mirroring any listed courses onto their rosters.
#[utoipa::path(
    post,
    path = "/v1/students",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Created student", body = StudentEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("/students")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Json<StudentPayload>,
) -> ApiResult<HttpResponse> {
    let new = parse_new_student(payload.into_inner())?;
    let student = state.students.create(new).await?;
    Ok(HttpResponse::Created().json(DataEnvelope { data: student }))
}

/// Update a student; a supplied course list replaces the whole set.
#[utoipa::path(
    put,
    path = "/v1/students/{id}",
    params(("id" = String, Path, description = "Student identifier")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Updated student", body = StudentEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Student not found", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/students/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<StudentPayload>,
) -> ApiResult<HttpResponse> {
    let id = parse_student_id(&path.into_inner())?;
    let update = parse_student_update(payload.into_inner())?;
    let student = state.students.update(id, update).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: student }))
}

/// Delete a student and strip it from every course roster.
#[utoipa::path(
    delete,
    path = "/v1/students/{id}",
    params(("id" = String, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Deleted student", body = StudentEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Student not found", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_student_id(&path.into_inner())?;
    let student = state.students.delete(id).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: student }))
}

/// Link a student and a course, updating both sides.
#[utoipa::path(
    put,
    path = "/v1/students/{id}/courses/{course_id}",
    params(
        ("id" = String, Path, description = "Student identifier"),
        ("course_id" = String, Path, description = "Course identifier")
    ),
    responses(
        (status = 200, description = "Linked student", body = StudentEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Student or course not found", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "linkStudentCourse"
)]
#[put("/students/{id}/courses/{course_id}")]
pub async fn link_student_course(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (id, course) = parse_link_path(path.into_inner())?;
    let student = state.students.link_course(id, course).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: student }))
}

/// Unlink a student and a course, updating both sides.
#[utoipa::path(
    delete,
    path = "/v1/students/{id}/courses/{course_id}",
    params(
        ("id" = String, Path, description = "Student identifier"),
        ("course_id" = String, Path, description = "Course identifier")
    ),
    responses(
        (status = 200, description = "Unlinked student", body = StudentEnvelope),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Student or course not found", body = ErrorSchema),
        (status = 500, description = "Roster propagation failed", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "unlinkStudentCourse"
)]
#[delete("/students/{id}/courses/{course_id}")]
pub async fn unlink_student_course(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (id, course) = parse_link_path(path.into_inner())?;
    let student = state.students.unlink_course(id, course).await?;
    Ok(HttpResponse::Ok().json(DataEnvelope { data: student }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::PersonName;
    use crate::domain::ports::{
        MockCoursesCommand, MockCoursesQuery, MockStudentsCommand, MockStudentsQuery,
        MockTeachersCommand, MockTeachersQuery,
    };
    use crate::domain::student::Student;
    use crate::domain::ErrorCode;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn state(queries: MockStudentsQuery, commands: MockStudentsCommand) -> HttpState {
        HttpState {
            students_query: Arc::new(queries),
            students: Arc::new(commands),
            teachers_query: Arc::new(MockTeachersQuery::new()),
            teachers: Arc::new(MockTeachersCommand::new()),
            courses_query: Arc::new(MockCoursesQuery::new()),
            courses: Arc::new(MockCoursesCommand::new()),
        }
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/v1")
                .service(list_students)
                .service(create_student)
                .service(get_student)
                .service(update_student)
                .service(delete_student)
                .service(link_student_course)
                .service(unlink_student_course),
        )
    }

    fn student_from(new: NewStudent) -> Student {
        Student {
            id: StudentId::random(),
            first_name: new.first_name,
            last_name: new.last_name,
            courses: new.courses,
        }
    }

    #[rstest]
    fn parse_new_student_rejects_missing_first_name() {
        let payload = StudentPayload {
            first_name: None,
            last_name: Some("Byron".to_owned()),
            courses: None,
        };
        let err = parse_new_student(payload).expect_err("missing firstName");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn parse_new_student_defaults_courses_to_empty() {
        let payload = StudentPayload {
            first_name: Some("Ada".to_owned()),
            last_name: Some("Byron".to_owned()),
            courses: None,
        };
        let new = parse_new_student(payload).expect("valid payload");
        assert!(new.courses.is_empty());
    }

    #[rstest]
    fn parse_student_update_keeps_unsupplied_fields_untouched() {
        let payload = StudentPayload {
            first_name: Some("Ada".to_owned()),
            last_name: None,
            courses: None,
        };
        let update = parse_student_update(payload).expect("valid payload");
        assert!(update.first_name.is_some());
        assert!(update.last_name.is_none());
        assert!(!update.replaces_courses());
    }

    #[actix_web::test]
    async fn create_student_returns_201_with_envelope() {
        let mut commands = MockStudentsCommand::new();
        commands
            .expect_create()
            .times(1)
            .return_once(|new| Ok(student_from(new)));
        let app =
            actix_test::init_service(test_app(state(MockStudentsQuery::new(), commands))).await;

        let request = actix_test::TestRequest::post()
            .uri("/v1/students")
            .set_json(json!({ "firstName": "Ada", "lastName": "Byron" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["data"]["firstName"], json!("Ada"));
        assert!(body["data"]["courses"].as_array().expect("array").is_empty());
    }

    #[actix_web::test]
    async fn create_student_rejects_short_names() {
        let app = actix_test::init_service(test_app(state(
            MockStudentsQuery::new(),
            MockStudentsCommand::new(),
        )))
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/v1/students")
            .set_json(json!({ "firstName": "A", "lastName": "Byron" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], json!("too_short"));
    }

    #[actix_web::test]
    async fn get_student_rejects_malformed_identifiers() {
        let app = actix_test::init_service(test_app(state(
            MockStudentsQuery::new(),
            MockStudentsCommand::new(),
        )))
        .await;

        let request = actix_test::TestRequest::get()
            .uri("/v1/students/not-a-uuid")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_student_surfaces_not_found() {
        let mut commands = MockStudentsCommand::new();
        commands
            .expect_delete()
            .times(1)
            .return_once(|_| Err(Error::not_found("Student not found")));
        let app =
            actix_test::init_service(test_app(state(MockStudentsQuery::new(), commands))).await;

        let request = actix_test::TestRequest::delete()
            .uri(&format!("/v1/students/{}", StudentId::random()))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["error"], json!("Student not found"));
    }

    #[actix_web::test]
    async fn link_passes_both_identifiers_to_the_command() {
        let id = StudentId::random();
        let course = CourseId::random();
        let mut commands = MockStudentsCommand::new();
        commands
            .expect_link_course()
            .with(eq(id), eq(course))
            .times(1)
            .return_once(move |id, course| {
                Ok(Student {
                    id,
                    first_name: PersonName::new("Ada").expect("valid name"),
                    last_name: PersonName::new("Byron").expect("valid name"),
                    courses: vec![course],
                })
            });
        let app =
            actix_test::init_service(test_app(state(MockStudentsQuery::new(), commands))).await;

        let request = actix_test::TestRequest::put()
            .uri(&format!("/v1/students/{id}/courses/{course}"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["data"]["courses"][0], json!(course.to_string()));
    }

    #[actix_web::test]
    async fn list_students_wraps_the_collection() {
        let mut queries = MockStudentsQuery::new();
        queries.expect_list().times(1).return_once(|| Ok(Vec::new()));
        let app =
            actix_test::init_service(test_app(state(queries, MockStudentsCommand::new()))).await;

        let request = actix_test::TestRequest::get().uri("/v1/students").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["data"], json!([]));
    }
}

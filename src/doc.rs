//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API. Paths come from the inbound HTTP layer; schemas are the
//! adapter-side mirrors of the domain types, so the domain itself stays
//! free of utoipa derives. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CourseEnvelope, CourseListEnvelope, CourseSchema, ErrorCodeSchema, ErrorSchema,
    StudentEnvelope, StudentListEnvelope, StudentSchema, TeacherEnvelope, TeacherListEnvelope,
    TeacherSchema,
};

/// OpenAPI document for the roster REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "CRUD endpoints for students, teachers, and courses \
                       with bidirectional enrolment consistency."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::students::link_student_course,
        crate::inbound::http::students::unlink_student_course,
        crate::inbound::http::teachers::list_teachers,
        crate::inbound::http::teachers::create_teacher,
        crate::inbound::http::teachers::get_teacher,
        crate::inbound::http::teachers::update_teacher,
        crate::inbound::http::teachers::delete_teacher,
        crate::inbound::http::teachers::link_teacher_course,
        crate::inbound::http::teachers::unlink_teacher_course,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        StudentSchema,
        StudentEnvelope,
        StudentListEnvelope,
        TeacherSchema,
        TeacherEnvelope,
        TeacherListEnvelope,
        CourseSchema,
        CourseEnvelope,
        CourseListEnvelope,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "students", description = "Student records and their course links"),
        (name = "teachers", description = "Teacher records and their course links"),
        (name = "courses", description = "Course records and reference sweeps"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

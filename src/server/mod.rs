//! Server construction and application wiring.
//!
//! `configure_app` registers the full route table on a `ServiceConfig`, so
//! the binary and integration tests assemble the exact same application.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing::error;

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{CourseService, Error, StudentService, TeacherService};
use crate::inbound::http::courses::{
    create_course, delete_course, get_course, list_courses, update_course,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::students::{
    create_student, delete_student, get_student, link_student_course, list_students,
    unlink_student_course, update_student,
};
use crate::inbound::http::teachers::{
    create_teacher, delete_teacher, get_teacher, link_teacher_course, list_teachers,
    unlink_teacher_course, update_teacher,
};
use crate::outbound::persistence::{
    MemoryCourseRepository, MemoryStudentRepository, MemoryTeacherRepository,
};

/// Wire the in-memory record store into the domain services and bundle the
/// resulting driving ports for the HTTP adapter.
pub fn build_state() -> HttpState {
    let students = Arc::new(MemoryStudentRepository::new());
    let teachers = Arc::new(MemoryTeacherRepository::new());
    let courses = Arc::new(MemoryCourseRepository::new());

    let student_service = Arc::new(StudentService::new(
        Arc::clone(&students),
        Arc::clone(&courses),
    ));
    let teacher_service = Arc::new(TeacherService::new(
        Arc::clone(&teachers),
        Arc::clone(&courses),
    ));
    let course_service = Arc::new(CourseService::new(courses, students, teachers));

    HttpState {
        students_query: Arc::clone(&student_service) as _,
        students: student_service,
        teachers_query: Arc::clone(&teacher_service) as _,
        teachers: teacher_service,
        courses_query: Arc::clone(&course_service) as _,
        courses: course_service,
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        error!(error = %err, "malformed JSON payload");
        Error::invalid_request(format!("invalid JSON payload: {err}")).into()
    })
}

/// Register state, JSON handling, and the full route table.
///
/// Shared between `create_server` and the integration tests so both drive
/// an identically configured application.
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    state: HttpState,
    health: web::Data<HealthState>,
) {
    cfg.app_data(json_config())
        .app_data(web::Data::new(state))
        .app_data(health)
        .service(
            web::scope("/v1")
                .service(list_students)
                .service(create_student)
                .service(get_student)
                .service(update_student)
                .service(delete_student)
                .service(link_student_course)
                .service(unlink_student_course)
                .service(list_teachers)
                .service(create_teacher)
                .service(get_teacher)
                .service(update_teacher)
                .service(delete_teacher)
                .service(link_teacher_course)
                .service(unlink_teacher_course)
                .service(list_courses)
                .service(create_course)
                .service(get_course)
                .service(update_course)
                .service(delete_course),
        )
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    cfg.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
}

/// Construct an Actix HTTP server bound per the provided settings.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    settings: &ServerSettings,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let state = build_state();
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let state = state.clone();
        let health = server_health_state.clone();
        App::new().configure(move |cfg| configure_app(cfg, state, health))
    })
    .bind(settings.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

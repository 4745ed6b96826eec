//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend
//! only on the domain's driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CoursesCommand, CoursesQuery, StudentsCommand, StudentsQuery, TeachersCommand, TeachersQuery,
};

/// Dependency bundle for HTTP handlers, one slot per driving port.
#[derive(Clone)]
pub struct HttpState {
    pub students_query: Arc<dyn StudentsQuery>,
    pub students: Arc<dyn StudentsCommand>,
    pub teachers_query: Arc<dyn TeachersQuery>,
    pub teachers: Arc<dyn TeachersCommand>,
    pub courses_query: Arc<dyn CoursesQuery>,
    pub courses: Arc<dyn CoursesCommand>,
}

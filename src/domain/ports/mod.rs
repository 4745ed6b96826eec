//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) face the record store; driving ports
//! (`*Query`/`*Command`) face inbound adapters and are implemented by the
//! entity services.

mod macros;
pub(crate) use macros::define_port_error;

mod course_repository;
mod courses;
mod student_repository;
mod students;
mod teacher_repository;
mod teachers;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
#[cfg(test)]
pub use courses::{MockCoursesCommand, MockCoursesQuery};
pub use courses::{CoursesCommand, CoursesQuery};
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
#[cfg(test)]
pub use students::{MockStudentsCommand, MockStudentsQuery};
pub use students::{StudentsCommand, StudentsQuery};
#[cfg(test)]
pub use teacher_repository::MockTeacherRepository;
pub use teacher_repository::{TeacherRepository, TeacherRepositoryError};
#[cfg(test)]
pub use teachers::{MockTeachersCommand, MockTeachersQuery};
pub use teachers::{TeachersCommand, TeachersQuery};

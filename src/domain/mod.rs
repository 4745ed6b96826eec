//! Domain entities, ports, and services.
//!
//! Everything in this module is transport agnostic: inbound adapters parse
//! requests into the types defined here and map [`Error`] onto their own
//! envelopes, while the record store sits behind the repository ports.

pub mod course;
pub mod course_service;
pub mod error;
pub mod fields;
pub mod ids;
pub mod ports;
pub mod roster;
pub mod student;
pub mod student_service;
pub mod teacher;
pub mod teacher_service;

pub use self::course::{Course, CourseUpdate, NewCourse};
pub use self::course_service::CourseService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fields::{
    CourseDescription, CourseName, EmailAddress, FieldValidationError, PersonName,
};
pub use self::ids::{CourseId, StudentId, TeacherId};
pub use self::roster::{RosterMaintainer, RosterSide};
pub use self::student::{NewStudent, Student, StudentUpdate};
pub use self::student_service::StudentService;
pub use self::teacher::{NewTeacher, Teacher, TeacherUpdate};
pub use self::teacher_service::TeacherService;

//! Driving ports for student use-cases.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ids::{CourseId, StudentId};
use crate::domain::student::{NewStudent, Student, StudentUpdate};

/// Read-side student operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsQuery: Send + Sync {
    /// All students.
    async fn list(&self) -> Result<Vec<Student>, Error>;

    /// One student, or a not-found error.
    async fn get(&self, id: StudentId) -> Result<Student, Error>;
}

/// Write-side student operations exposed to inbound adapters.
///
/// `create` and `update` propagate roster changes to the referenced courses
/// before returning, so callers always observe the fully-propagated (or
/// propagation-failed) result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsCommand: Send + Sync {
    /// Create a student and mirror any listed courses.
    async fn create(&self, new: NewStudent) -> Result<Student, Error>;

    /// Update a student; a supplied `courses` list replaces the whole set
    /// and is mirrored onto the affected courses.
    async fn update(&self, id: StudentId, update: StudentUpdate) -> Result<Student, Error>;

    /// Delete a student and strip it from every course roster.
    async fn delete(&self, id: StudentId) -> Result<Student, Error>;

    /// Explicitly link a student and a course, updating both sides.
    async fn link_course(&self, id: StudentId, course: CourseId) -> Result<Student, Error>;

    /// Explicitly unlink a student and a course, updating both sides.
    async fn unlink_course(&self, id: StudentId, course: CourseId) -> Result<Student, Error>;
}

//! Driving ports for teacher use-cases.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ids::{CourseId, TeacherId};
use crate::domain::teacher::{NewTeacher, Teacher, TeacherUpdate};

/// Read-side teacher operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeachersQuery: Send + Sync {
    /// All teachers.
    async fn list(&self) -> Result<Vec<Teacher>, Error>;

    /// One teacher, or a not-found error.
    async fn get(&self, id: TeacherId) -> Result<Teacher, Error>;
}

/// Write-side teacher operations; propagation semantics match
/// [`super::StudentsCommand`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeachersCommand: Send + Sync {
    /// Create a teacher and mirror any listed courses.
    async fn create(&self, new: NewTeacher) -> Result<Teacher, Error>;

    /// Update a teacher; a supplied `courses` list replaces the whole set.
    async fn update(&self, id: TeacherId, update: TeacherUpdate) -> Result<Teacher, Error>;

    /// Delete a teacher and strip it from every course roster.
    async fn delete(&self, id: TeacherId) -> Result<Teacher, Error>;

    /// Explicitly link a teacher and a course, updating both sides.
    async fn link_course(&self, id: TeacherId, course: CourseId) -> Result<Teacher, Error>;

    /// Explicitly unlink a teacher and a course, updating both sides.
    async fn unlink_course(&self, id: TeacherId, course: CourseId) -> Result<Teacher, Error>;
}

//! Port for teacher persistence adapters.

use async_trait::async_trait;

use crate::domain::ids::{CourseId, TeacherId};
use crate::domain::teacher::{NewTeacher, Teacher, TeacherUpdate};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by teacher repository adapters.
    pub enum TeacherRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "teacher repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "teacher repository query failed: {message}",
    }
}

/// Record-store facade for the teacher collection; the contract mirrors
/// [`super::StudentRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// All teachers in the collection.
    async fn list(&self) -> Result<Vec<Teacher>, TeacherRepositoryError>;

    /// Point lookup by identifier.
    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, TeacherRepositoryError>;

    /// Insert a new record; the store generates the identifier.
    async fn insert(&self, new: NewTeacher) -> Result<Teacher, TeacherRepositoryError>;

    /// Apply a field update, returning the updated record.
    async fn update_by_id(
        &self,
        id: TeacherId,
        update: TeacherUpdate,
    ) -> Result<Option<Teacher>, TeacherRepositoryError>;

    /// Delete a record, returning it.
    async fn delete_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, TeacherRepositoryError>;

    /// Add a course reference to one teacher, no-op if already present.
    async fn add_course(
        &self,
        id: TeacherId,
        course: CourseId,
    ) -> Result<Option<Teacher>, TeacherRepositoryError>;

    /// Remove a course reference from one teacher, no-op if absent.
    async fn remove_course(
        &self,
        id: TeacherId,
        course: CourseId,
    ) -> Result<Option<Teacher>, TeacherRepositoryError>;

    /// Strip a course reference from every teacher holding it.
    async fn remove_course_from_all(
        &self,
        course: CourseId,
    ) -> Result<(), TeacherRepositoryError>;
}

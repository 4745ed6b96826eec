//! Port for student persistence adapters.

use async_trait::async_trait;

use crate::domain::ids::{CourseId, StudentId};
use crate::domain::student::{NewStudent, Student, StudentUpdate};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "student repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "student repository query failed: {message}",
    }
}

/// Record-store facade for the student collection.
///
/// Mutations are persisted immediately; there is no caching layer between
/// the port and the store. `add_course`/`remove_course` carry set semantics
/// (add-if-absent, remove-by-value) on the student's `courses` field.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students in the collection.
    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Point lookup by identifier.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Insert a new record; the store generates the identifier.
    async fn insert(&self, new: NewStudent) -> Result<Student, StudentRepositoryError>;

    /// Apply a field update, returning the updated record.
    async fn update_by_id(
        &self,
        id: StudentId,
        update: StudentUpdate,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Delete a record, returning it.
    async fn delete_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Add a course reference to one student, no-op if already present.
    async fn add_course(
        &self,
        id: StudentId,
        course: CourseId,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Remove a course reference from one student, no-op if absent.
    async fn remove_course(
        &self,
        id: StudentId,
        course: CourseId,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Strip a course reference from every student holding it.
    async fn remove_course_from_all(
        &self,
        course: CourseId,
    ) -> Result<(), StudentRepositoryError>;
}

//! Port for course persistence adapters.
//!
//! Roster mutations are parameterised by [`RosterSide`] so the student and
//! teacher propagation paths share one contract; members are addressed by
//! raw UUID because the side selects the concrete identifier type.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::course::{Course, CourseUpdate, NewCourse};
use crate::domain::ids::CourseId;
use crate::domain::roster::RosterSide;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by course repository adapters.
    pub enum CourseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "course repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "course repository query failed: {message}",
    }
}

/// Record-store facade for the course collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All courses in the collection.
    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError>;

    /// Point lookup by identifier.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Insert a new record with empty rosters; the store generates the id.
    async fn insert(&self, new: NewCourse) -> Result<Course, CourseRepositoryError>;

    /// Apply a scalar-field update, returning the updated record.
    async fn update_by_id(
        &self,
        id: CourseId,
        update: CourseUpdate,
    ) -> Result<Option<Course>, CourseRepositoryError>;

    /// Delete a record, returning it.
    async fn delete_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Filtered lookup: every course whose roster references the member.
    async fn find_referencing(
        &self,
        side: RosterSide,
        member: Uuid,
    ) -> Result<Vec<Course>, CourseRepositoryError>;

    /// Add the member to the roster of every listed course, skipping
    /// courses that already hold it and ids that match no course.
    async fn add_member(
        &self,
        courses: Vec<CourseId>,
        side: RosterSide,
        member: Uuid,
    ) -> Result<(), CourseRepositoryError>;

    /// Remove the member from one course's roster, returning the updated
    /// course; no-op on the roster if the member is absent.
    async fn remove_member(
        &self,
        course: CourseId,
        side: RosterSide,
        member: Uuid,
    ) -> Result<Option<Course>, CourseRepositoryError>;

    /// Remove the member from every roster referencing it.
    async fn remove_member_everywhere(
        &self,
        side: RosterSide,
        member: Uuid,
    ) -> Result<(), CourseRepositoryError>;
}

//! Driving ports for course use-cases.
//!
//! Course commands touch scalar fields only. Rosters change through the
//! student/teacher commands and the explicit link operations, never through
//! a direct course edit.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::course::{Course, CourseUpdate, NewCourse};
use crate::domain::ids::CourseId;

/// Read-side course operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesQuery: Send + Sync {
    /// All courses.
    async fn list(&self) -> Result<Vec<Course>, Error>;

    /// One course, or a not-found error.
    async fn get(&self, id: CourseId) -> Result<Course, Error>;
}

/// Write-side course operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesCommand: Send + Sync {
    /// Create a course with empty rosters.
    async fn create(&self, new: NewCourse) -> Result<Course, Error>;

    /// Update a course's scalar fields.
    async fn update(&self, id: CourseId, update: CourseUpdate) -> Result<Course, Error>;

    /// Delete a course and strip it from every student and teacher.
    async fn delete(&self, id: CourseId) -> Result<Course, Error>;
}

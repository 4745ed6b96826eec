//! Student entity service.
//!
//! Orchestrates validate → persist → propagate for every student operation.
//! The primary write always lands first; roster propagation runs
//! synchronously afterwards, so a caller never observes a success response
//! for a half-applied operation — a propagation failure surfaces as
//! [`ErrorCode::PropagationFailed`](crate::domain::ErrorCode) with the
//! invariant left broken.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::Error;
use crate::domain::ids::{CourseId, StudentId};
use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, StudentRepository, StudentRepositoryError,
    StudentsCommand, StudentsQuery,
};
use crate::domain::roster::{RosterMaintainer, RosterSide};
use crate::domain::student::{NewStudent, Student, StudentUpdate};

/// Student service implementing the driving ports.
pub struct StudentService<S, C> {
    students: Arc<S>,
    courses: Arc<C>,
    roster: RosterMaintainer<C>,
}

impl<S, C> Clone for StudentService<S, C> {
    fn clone(&self) -> Self {
        Self {
            students: Arc::clone(&self.students),
            courses: Arc::clone(&self.courses),
            roster: self.roster.clone(),
        }
    }
}

impl<S, C> StudentService<S, C> {
    /// Create a new service over the student and course repositories.
    pub fn new(students: Arc<S>, courses: Arc<C>) -> Self {
        let roster = RosterMaintainer::new(Arc::clone(&courses));
        Self {
            students,
            courses,
            roster,
        }
    }

    fn not_found() -> Error {
        Error::not_found("Student not found")
    }

    fn pair_not_found() -> Error {
        Error::not_found("Student or Course not found")
    }

    fn map_repo_error(err: StudentRepositoryError) -> Error {
        error!(error = %err, "student repository failure");
        Error::internal(format!("student repository error: {err}"))
    }

    fn map_course_error(err: CourseRepositoryError) -> Error {
        error!(error = %err, "course repository failure");
        Error::internal(format!("course repository error: {err}"))
    }

    fn map_propagation_error(err: CourseRepositoryError) -> Error {
        error!(error = %err, "roster propagation failed after primary write");
        Error::propagation(format!("course roster update failed: {err}"))
    }
}

#[async_trait]
impl<S, C> StudentsQuery for StudentService<S, C>
where
    S: StudentRepository,
    C: CourseRepository,
{
    async fn list(&self) -> Result<Vec<Student>, Error> {
        self.students.list().await.map_err(Self::map_repo_error)
    }

    async fn get(&self, id: StudentId) -> Result<Student, Error> {
        self.students
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl<S, C> StudentsCommand for StudentService<S, C>
where
    S: StudentRepository,
    C: CourseRepository,
{
    async fn create(&self, new: NewStudent) -> Result<Student, Error> {
        let student = self
            .students
            .insert(new)
            .await
            .map_err(Self::map_repo_error)?;
        self.roster
            .attach(RosterSide::Students, student.id.as_uuid(), &student.courses)
            .await
            .map_err(Self::map_propagation_error)?;
        Ok(student)
    }

    async fn update(&self, id: StudentId, update: StudentUpdate) -> Result<Student, Error> {
        let replacement = update.courses.clone();
        let student = self
            .students
            .update_by_id(id, update)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)?;
        if let Some(courses) = replacement {
            self.roster
                .replace(RosterSide::Students, id.as_uuid(), &courses)
                .await
                .map_err(Self::map_propagation_error)?;
        }
        Ok(student)
    }

    async fn delete(&self, id: StudentId) -> Result<Student, Error> {
        let deleted = self
            .students
            .delete_by_id(id)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)?;
        self.roster
            .detach(RosterSide::Students, id.as_uuid())
            .await
            .map_err(Self::map_propagation_error)?;
        Ok(deleted)
    }

    async fn link_course(&self, id: StudentId, course: CourseId) -> Result<Student, Error> {
        let student = self
            .students
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?;
        let existing_course = self
            .courses
            .find_by_id(course)
            .await
            .map_err(Self::map_course_error)?;
        let (Some(_), Some(_)) = (student, existing_course) else {
            return Err(Self::pair_not_found());
        };

        let updated = self
            .students
            .add_course(id, course)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::pair_not_found)?;
        self.courses
            .add_member(vec![course], RosterSide::Students, id.as_uuid())
            .await
            .map_err(Self::map_propagation_error)?;
        Ok(updated)
    }

    async fn unlink_course(&self, id: StudentId, course: CourseId) -> Result<Student, Error> {
        let student = self
            .students
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?;
        let existing_course = self
            .courses
            .find_by_id(course)
            .await
            .map_err(Self::map_course_error)?;
        let (Some(_), Some(_)) = (student, existing_course) else {
            return Err(Self::pair_not_found());
        };

        let updated = self
            .students
            .remove_course(id, course)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::pair_not_found)?;
        self.courses
            .remove_member(course, RosterSide::Students, id.as_uuid())
            .await
            .map_err(Self::map_propagation_error)?;
        Ok(updated)
    }
}

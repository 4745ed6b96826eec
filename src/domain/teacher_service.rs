//! Teacher entity service.
//!
//! Mirrors [`crate::domain::StudentService`] on the teachers side of the
//! course rosters; see that module for the propagation contract.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::Error;
use crate::domain::ids::{CourseId, TeacherId};
use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, TeacherRepository, TeacherRepositoryError,
    TeachersCommand, TeachersQuery,
};
use crate::domain::roster::{RosterMaintainer, RosterSide};
use crate::domain::teacher::{NewTeacher, Teacher, TeacherUpdate};

/// Teacher service implementing the driving ports.
pub struct TeacherService<T, C> {
    teachers: Arc<T>,
    courses: Arc<C>,
    roster: RosterMaintainer<C>,
}

impl<T, C> Clone for TeacherService<T, C> {
    fn clone(&self) -> Self {
        Self {
            teachers: Arc::clone(&self.teachers),
            courses: Arc::clone(&self.courses),
            roster: self.roster.clone(),
        }
    }
}

impl<T, C> TeacherService<T, C> {
    /// Create a new service over the teacher and course repositories.
    pub fn new(teachers: Arc<T>, courses: Arc<C>) -> Self {
        let roster = RosterMaintainer::new(Arc::clone(&courses));
        Self {
            teachers,
            courses,
            roster,
        }
    }

    fn not_found() -> Error {
        Error::not_found("Teacher not found")
    }

    fn pair_not_found() -> Error {
        Error::not_found("Teacher or Course not found")
    }

    fn map_repo_error(err: TeacherRepositoryError) -> Error {
        error!(error = %err, "teacher repository failure");
        Error::internal(format!("teacher repository error: {err}"))
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
impl<T, C> TeachersQuery for TeacherService<T, C>
where
    T: TeacherRepository,
    C: CourseRepository,
{
    async fn list(&self) -> Result<Vec<Teacher>, Error> {
        self.teachers.list().await.map_err(Self::map_repo_error)
    }

    async fn get(&self, id: TeacherId) -> Result<Teacher, Error> {
        self.teachers
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl<T, C> TeachersCommand for TeacherService<T, C>
where
    T: TeacherRepository,
    C: CourseRepository,
{
    async fn create(&self, new: NewTeacher) -> Result<Teacher, Error> {
        let teacher = self
            .teachers
            .insert(new)
            .await
            .map_err(Self::map_repo_error)?;
        self.roster
            .attach(RosterSide::Teachers, teacher.id.as_uuid(), &teacher.courses)
            .await
            .map_err(Self::map_propagation_error)?;
        Ok(teacher)
    }

    async fn update(&self, id: TeacherId, update: TeacherUpdate) -> Result<Teacher, Error> {
        let replacement = update.courses.clone();
        let teacher = self
            .teachers
            .update_by_id(id, update)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)?;
        if let Some(courses) = replacement {
            self.roster
                .replace(RosterSide::Teachers, id.as_uuid(), &courses)
                .await
                .map_err(Self::map_propagation_error)?;
        }
        Ok(teacher)
    }

    async fn delete(&self, id: TeacherId) -> Result<Teacher, Error> {
        let deleted = self
            .teachers
            .delete_by_id(id)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)?;
        self.roster
            .detach(RosterSide::Teachers, id.as_uuid())
            .await
            .map_err(Self::map_propagation_error)?;
        Ok(deleted)
    }

    async fn link_course(&self, id: TeacherId, course: CourseId) -> Result<Teacher, Error> {
        let teacher = self
            .teachers
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?;
        let existing_course = self
            .courses
            .find_by_id(course)
            .await
            .map_err(Self::map_course_error)?;
        let (Some(_), Some(_)) = (teacher, existing_course) else {
            return Err(Self::pair_not_found());
        };

        let updated = self
            .teachers
            .add_course(id, course)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::pair_not_found)?;
        self.courses
            .add_member(vec![course], RosterSide::Teachers, id.as_uuid())
            .await
            .map_err(Self::map_propagation_error)?;
        Ok(updated)
    }

    async fn unlink_course(&self, id: TeacherId, course: CourseId) -> Result<Teacher, Error> {
        let teacher = self
            .teachers
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?;
        let existing_course = self
            .courses
            .find_by_id(course)
            .await
            .map_err(Self::map_course_error)?;
        let (Some(_), Some(_)) = (teacher, existing_course) else {
            return Err(Self::pair_not_found());
        };

        let updated = self
            .teachers
            .remove_course(id, course)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::pair_not_found)?;
        self.courses
            .remove_member(course, RosterSide::Teachers, id.as_uuid())
            .await
            .map_err(Self::map_propagation_error)?;
        Ok(updated)
    }
}

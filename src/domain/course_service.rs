//! Course entity service.
//!
//! Course commands touch scalar fields only; the inverse sweep on delete —
//! stripping the course from every student's and teacher's `courses` set —
//! is the one propagation this service performs. Both sweeps are bulk
//! operations and run students-first, so a failure between them leaves only
//! the teacher side stale.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::Error;
use crate::domain::course::{Course, CourseUpdate, NewCourse};
use crate::domain::ids::CourseId;
use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, CoursesCommand, CoursesQuery, StudentRepository,
    StudentRepositoryError, TeacherRepository, TeacherRepositoryError,
};

/// Course service implementing the driving ports.
pub struct CourseService<C, S, T> {
    courses: Arc<C>,
    students: Arc<S>,
    teachers: Arc<T>,
}

impl<C, S, T> Clone for CourseService<C, S, T> {
    fn clone(&self) -> Self {
        Self {
            courses: Arc::clone(&self.courses),
            students: Arc::clone(&self.students),
            teachers: Arc::clone(&self.teachers),
        }
    }
}

impl<C, S, T> CourseService<C, S, T> {
    /// Create a new service over the three repositories.
    pub fn new(courses: Arc<C>, students: Arc<S>, teachers: Arc<T>) -> Self {
        Self {
            courses,
            students,
            teachers,
        }
    }

    fn not_found() -> Error {
        Error::not_found("Course not found")
    }

    fn map_repo_error(err: CourseRepositoryError) -> Error {
        error!(error = %err, "course repository failure");
        Error::internal(format!("course repository error: {err}"))
    }

    fn map_student_sweep_error(err: StudentRepositoryError) -> Error {
        error!(error = %err, "student sweep failed after course delete");
        Error::propagation(format!("student course-reference sweep failed: {err}"))
    }

    fn map_teacher_sweep_error(err: TeacherRepositoryError) -> Error {
        error!(error = %err, "teacher sweep failed after course delete");
        Error::propagation(format!("teacher course-reference sweep failed: {err}"))
    }
}

#[async_trait]
impl<C, S, T> CoursesQuery for CourseService<C, S, T>
where
    C: CourseRepository,
    S: StudentRepository,
    T: TeacherRepository,
{
    async fn list(&self) -> Result<Vec<Course>, Error> {
        self.courses.list().await.map_err(Self::map_repo_error)
    }

    async fn get(&self, id: CourseId) -> Result<Course, Error> {
        self.courses
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl<C, S, T> CoursesCommand for CourseService<C, S, T>
where
    C: CourseRepository,
    S: StudentRepository,
    T: TeacherRepository,
{
    async fn create(&self, new: NewCourse) -> Result<Course, Error> {
        self.courses.insert(new).await.map_err(Self::map_repo_error)
    }

    async fn update(&self, id: CourseId, update: CourseUpdate) -> Result<Course, Error> {
        self.courses
            .update_by_id(id, update)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)
    }

    async fn delete(&self, id: CourseId) -> Result<Course, Error> {
        let deleted = self
            .courses
            .delete_by_id(id)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Self::not_found)?;
        self.students
            .remove_course_from_all(id)
            .await
            .map_err(Self::map_student_sweep_error)?;
        self.teachers
            .remove_course_from_all(id)
            .await
            .map_err(Self::map_teacher_sweep_error)?;
        Ok(deleted)
    }
}

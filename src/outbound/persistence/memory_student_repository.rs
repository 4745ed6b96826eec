//! In-memory student repository.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ids::{CourseId, StudentId};
use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::student::{NewStudent, Student, StudentUpdate};

use super::memory::{Document, MemoryCollection};

impl Document for Student {
    fn id(&self) -> Uuid {
        self.id.as_uuid()
    }
}

/// Student collection backed by [`MemoryCollection`]. Infallible by
/// construction; the error type exists for parity with durable adapters.
#[derive(Debug, Default)]
pub struct MemoryStudentRepository {
    collection: MemoryCollection<Student>,
}

impl MemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for MemoryStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self.collection.find())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.collection.find_by_id(id.as_uuid()))
    }

    async fn insert(&self, new: NewStudent) -> Result<Student, StudentRepositoryError> {
        Ok(self.collection.insert(|id| Student {
            id: StudentId::from_uuid(id),
            first_name: new.first_name,
            last_name: new.last_name,
            courses: new.courses,
        }))
    }

    async fn update_by_id(
        &self,
        id: StudentId,
        update: StudentUpdate,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self
            .collection
            .update_by_id(id.as_uuid(), |student| student.apply_update(update)))
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.collection.delete_by_id(id.as_uuid()))
    }

    async fn add_course(
        &self,
        id: StudentId,
        course: CourseId,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self
            .collection
            .update_by_id(id.as_uuid(), |student| student.add_course(course)))
    }

    async fn remove_course(
        &self,
        id: StudentId,
        course: CourseId,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self
            .collection
            .update_by_id(id.as_uuid(), |student| student.remove_course(&course)))
    }

    async fn remove_course_from_all(
        &self,
        course: CourseId,
    ) -> Result<(), StudentRepositoryError> {
        self.collection.remove_from_relation_set(
            |student| student.has_course(&course),
            |student| &mut student.courses,
            course,
        );
        Ok(())
    }
}

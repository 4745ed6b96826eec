//! In-memory teacher repository.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ids::{CourseId, TeacherId};
use crate::domain::ports::{TeacherRepository, TeacherRepositoryError};
use crate::domain::teacher::{NewTeacher, Teacher, TeacherUpdate};

use super::memory::{Document, MemoryCollection};

impl Document for Teacher {
    fn id(&self) -> Uuid {
        self.id.as_uuid()
    }
}

/// Teacher collection backed by [`MemoryCollection`].
#[derive(Debug, Default)]
pub struct MemoryTeacherRepository {
    collection: MemoryCollection<Teacher>,
}

impl MemoryTeacherRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeacherRepository for MemoryTeacherRepository {
    async fn list(&self) -> Result<Vec<Teacher>, TeacherRepositoryError> {
        Ok(self.collection.find())
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, TeacherRepositoryError> {
        Ok(self.collection.find_by_id(id.as_uuid()))
    }

    async fn insert(&self, new: NewTeacher) -> Result<Teacher, TeacherRepositoryError> {
        Ok(self.collection.insert(|id| Teacher {
            id: TeacherId::from_uuid(id),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            courses: new.courses,
        }))
    }

    async fn update_by_id(
        &self,
        id: TeacherId,
        update: TeacherUpdate,
    ) -> Result<Option<Teacher>, TeacherRepositoryError> {
        Ok(self
            .collection
            .update_by_id(id.as_uuid(), |teacher| teacher.apply_update(update)))
    }

    async fn delete_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, TeacherRepositoryError> {
        Ok(self.collection.delete_by_id(id.as_uuid()))
    }

    async fn add_course(
        &self,
        id: TeacherId,
        course: CourseId,
    ) -> Result<Option<Teacher>, TeacherRepositoryError> {
        Ok(self
            .collection
            .update_by_id(id.as_uuid(), |teacher| teacher.add_course(course)))
    }

    async fn remove_course(
        &self,
        id: TeacherId,
        course: CourseId,
    ) -> Result<Option<Teacher>, TeacherRepositoryError> {
        Ok(self
            .collection
            .update_by_id(id.as_uuid(), |teacher| teacher.remove_course(&course)))
    }

    async fn remove_course_from_all(
        &self,
        course: CourseId,
    ) -> Result<(), TeacherRepositoryError> {
        self.collection.remove_from_relation_set(
            |teacher| teacher.has_course(&course),
            |teacher| &mut teacher.courses,
            course,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::{EmailAddress, PersonName};

    fn new_teacher(email: &str, courses: Vec<CourseId>) -> NewTeacher {
        NewTeacher {
            first_name: PersonName::new("Joan").expect("valid name"),
            last_name: PersonName::new("Clarke").expect("valid name"),
            email: EmailAddress::new(email).expect("valid email"),
            courses,
        }
    }

    #[tokio::test]
    async fn insert_keeps_the_email_and_courses() {
        let repo = MemoryTeacherRepository::new();
        let course = CourseId::random();
        let created = repo
            .insert(new_teacher("joan@example.org", vec![course]))
            .await
            .expect("insert succeeds");
        assert_eq!(created.email.as_ref(), "joan@example.org");
        assert_eq!(created.courses, vec![course]);
    }

    #[tokio::test]
    async fn update_by_id_changes_only_supplied_fields() {
        let repo = MemoryTeacherRepository::new();
        let created = repo
            .insert(new_teacher("joan@example.org", Vec::new()))
            .await
            .expect("insert succeeds");
        let updated = repo
            .update_by_id(
                created.id,
                TeacherUpdate {
                    email: Some(EmailAddress::new("clarke@example.org").expect("valid email")),
                    ..TeacherUpdate::default()
                },
            )
            .await
            .expect("update succeeds")
            .expect("record exists");
        assert_eq!(updated.email.as_ref(), "clarke@example.org");
        assert_eq!(updated.first_name, created.first_name);
    }

    #[tokio::test]
    async fn remove_course_from_all_strips_every_holder() {
        let repo = MemoryTeacherRepository::new();
        let course = CourseId::random();
        let holder = repo
            .insert(new_teacher("joan@example.org", vec![course]))
            .await
            .expect("insert succeeds");

        repo.remove_course_from_all(course).await.expect("sweep succeeds");

        let holder = repo
            .find_by_id(holder.id)
            .await
            .expect("lookup succeeds")
            .expect("record exists");
        assert!(holder.courses.is_empty());
    }
}

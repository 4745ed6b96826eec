//! In-memory course repository.
//!
//! Roster mutations dispatch on [`RosterSide`] and reuse the entity's own
//! set-semantics helpers, so the adapter cannot diverge from the domain's
//! idempotency rules.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::course::{Course, CourseUpdate, NewCourse};
use crate::domain::ids::CourseId;
use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::roster::RosterSide;

use super::memory::{Document, MemoryCollection};

impl Document for Course {
    fn id(&self) -> Uuid {
        self.id.as_uuid()
    }
}

/// Course collection backed by [`MemoryCollection`].
#[derive(Debug, Default)]
pub struct MemoryCourseRepository {
    collection: MemoryCollection<Course>,
}

impl MemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for MemoryCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self.collection.find())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.collection.find_by_id(id.as_uuid()))
    }

    async fn insert(&self, new: NewCourse) -> Result<Course, CourseRepositoryError> {
        Ok(self.collection.insert(|id| Course {
            id: CourseId::from_uuid(id),
            name: new.name,
            description: new.description,
            students: Vec::new(),
            teachers: Vec::new(),
        }))
    }

    async fn update_by_id(
        &self,
        id: CourseId,
        update: CourseUpdate,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self
            .collection
            .update_by_id(id.as_uuid(), |course| course.apply_update(update)))
    }

    async fn delete_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.collection.delete_by_id(id.as_uuid()))
    }

    async fn find_referencing(
        &self,
        side: RosterSide,
        member: Uuid,
    ) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self
            .collection
            .find_where(|course| course.roster_contains(side, member)))
    }

    async fn add_member(
        &self,
        courses: Vec<CourseId>,
        side: RosterSide,
        member: Uuid,
    ) -> Result<(), CourseRepositoryError> {
        for id in courses {
            self.collection
                .update_by_id(id.as_uuid(), |course| course.roster_add(side, member));
        }
        Ok(())
    }

    async fn remove_member(
        &self,
        course: CourseId,
        side: RosterSide,
        member: Uuid,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self
            .collection
            .update_by_id(course.as_uuid(), |course| course.roster_remove(side, member)))
    }

    async fn remove_member_everywhere(
        &self,
        side: RosterSide,
        member: Uuid,
    ) -> Result<(), CourseRepositoryError> {
        let stale: Vec<CourseId> = self
            .collection
            .find_where(|course| course.roster_contains(side, member))
            .into_iter()
            .map(|course| course.id)
            .collect();
        for id in stale {
            self.collection
                .update_by_id(id.as_uuid(), |course| course.roster_remove(side, member));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::{CourseDescription, CourseName};
    use rstest::rstest;

    fn new_course(name: &str) -> NewCourse {
        NewCourse {
            name: CourseName::new(name).expect("valid name"),
            description: CourseDescription::new("About the subject").expect("valid description"),
        }
    }

    async fn seeded(repo: &MemoryCourseRepository, name: &str) -> Course {
        repo.insert(new_course(name)).await.expect("insert succeeds")
    }

    #[tokio::test]
    async fn insert_starts_with_empty_rosters() {
        let repo = MemoryCourseRepository::new();
        let created = seeded(&repo, "Databases").await;
        assert!(created.students.is_empty());
        assert!(created.teachers.is_empty());
    }

    #[rstest]
    #[case(RosterSide::Students)]
    #[case(RosterSide::Teachers)]
    #[tokio::test]
    async fn add_member_skips_unknown_courses_and_duplicates(#[case] side: RosterSide) {
        let repo = MemoryCourseRepository::new();
        let course = seeded(&repo, "Databases").await;
        let member = Uuid::new_v4();

        repo.add_member(vec![course.id, CourseId::random()], side, member)
            .await
            .expect("add succeeds");
        repo.add_member(vec![course.id], side, member)
            .await
            .expect("add succeeds");

        let stored = repo
            .find_by_id(course.id)
            .await
            .expect("lookup succeeds")
            .expect("record exists");
        assert_eq!(stored.roster(side), vec![member]);
    }

    #[tokio::test]
    async fn find_referencing_matches_only_the_requested_side() {
        let repo = MemoryCourseRepository::new();
        let course = seeded(&repo, "Databases").await;
        let member = Uuid::new_v4();
        repo.add_member(vec![course.id], RosterSide::Students, member)
            .await
            .expect("add succeeds");

        let as_student = repo
            .find_referencing(RosterSide::Students, member)
            .await
            .expect("lookup succeeds");
        let as_teacher = repo
            .find_referencing(RosterSide::Teachers, member)
            .await
            .expect("lookup succeeds");
        assert_eq!(as_student.len(), 1);
        assert!(as_teacher.is_empty());
    }

    #[tokio::test]
    async fn remove_member_returns_the_updated_course() {
        let repo = MemoryCourseRepository::new();
        let course = seeded(&repo, "Databases").await;
        let member = Uuid::new_v4();
        repo.add_member(vec![course.id], RosterSide::Teachers, member)
            .await
            .expect("add succeeds");

        let updated = repo
            .remove_member(course.id, RosterSide::Teachers, member)
            .await
            .expect("remove succeeds")
            .expect("record exists");
        assert!(updated.teachers.is_empty());
    }

    #[tokio::test]
    async fn remove_member_everywhere_clears_all_rosters_on_one_side() {
        let repo = MemoryCourseRepository::new();
        let first = seeded(&repo, "Databases").await;
        let second = seeded(&repo, "Networks").await;
        let member = Uuid::new_v4();
        repo.add_member(vec![first.id, second.id], RosterSide::Students, member)
            .await
            .expect("add succeeds");
        repo.add_member(vec![first.id], RosterSide::Teachers, member)
            .await
            .expect("add succeeds");

        repo.remove_member_everywhere(RosterSide::Students, member)
            .await
            .expect("sweep succeeds");

        let referencing = repo
            .find_referencing(RosterSide::Students, member)
            .await
            .expect("lookup succeeds");
        assert!(referencing.is_empty());
        let first = repo
            .find_by_id(first.id)
            .await
            .expect("lookup succeeds")
            .expect("record exists");
        assert!(first.roster_contains(RosterSide::Teachers, member));
    }
}

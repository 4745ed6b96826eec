//! Bidirectional roster maintenance.
//!
//! Students and teachers reference courses through their `courses` field;
//! courses mirror those references in `students`/`teachers`. Neither side
//! owns the relationship, so every change to one side must be propagated to
//! the other. [`RosterMaintainer`] implements the course-side half of that
//! obligation for both member kinds; course deletion (the inverse sweep over
//! students and teachers) lives in the course service.
//!
//! Propagation runs after the primary write and outside any transaction: a
//! failure here leaves the invariant broken until repaired, which callers
//! surface as a distinct propagation error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ids::CourseId;
use crate::domain::ports::{CourseRepository, CourseRepositoryError};

/// Selects which course roster a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterSide {
    Students,
    Teachers,
}

impl RosterSide {
    /// The roster field name on the course document.
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Teachers => "teachers",
        }
    }
}

impl std::fmt::Display for RosterSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Propagates member-side `courses` changes onto course rosters.
pub struct RosterMaintainer<C> {
    courses: Arc<C>,
}

impl<C> Clone for RosterMaintainer<C> {
    fn clone(&self) -> Self {
        Self {
            courses: Arc::clone(&self.courses),
        }
    }
}

impl<C> RosterMaintainer<C> {
    /// Create a maintainer over the given course repository.
    pub fn new(courses: Arc<C>) -> Self {
        Self { courses }
    }
}

impl<C: CourseRepository> RosterMaintainer<C> {
    /// Mirror a newly created member onto every listed course.
    pub async fn attach(
        &self,
        side: RosterSide,
        member: Uuid,
        courses: &[CourseId],
    ) -> Result<(), CourseRepositoryError> {
        if courses.is_empty() {
            return Ok(());
        }
        self.courses.add_member(courses.to_vec(), side, member).await
    }

    /// Reconcile course rosters after a full-replacement `courses` update.
    ///
    /// The member is first removed from every course that currently
    /// references it, one course at a time, then added to every course in
    /// the new list in one bulk call. A course present in both sets is
    /// removed and re-added; the net effect is idempotent but the two
    /// phases are not atomic.
    pub async fn replace(
        &self,
        side: RosterSide,
        member: Uuid,
        new_courses: &[CourseId],
    ) -> Result<(), CourseRepositoryError> {
        let previous = self.courses.find_referencing(side, member).await?;
        for course in previous {
            self.courses.remove_member(course.id, side, member).await?;
        }
        if new_courses.is_empty() {
            return Ok(());
        }
        self.courses
            .add_member(new_courses.to_vec(), side, member)
            .await
    }

    /// Strip a deleted member from every course roster referencing it.
    pub async fn detach(&self, side: RosterSide, member: Uuid) -> Result<(), CourseRepositoryError> {
        self.courses.remove_member_everywhere(side, member).await
    }
}

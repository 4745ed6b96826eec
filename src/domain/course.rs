//! Course entity and its change descriptors.
//!
//! Courses carry two rosters, one per member side (students and teachers).
//! Direct roster edits are not exposed through course updates; rosters
//! change only via the roster maintainer and the explicit link operations,
//! which keeps both sides of each relationship in step.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::fields::{CourseDescription, CourseName};
use crate::domain::ids::{CourseId, StudentId, TeacherId};
use crate::domain::roster::RosterSide;

/// A course record with its two member rosters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: CourseName,
    pub description: CourseDescription,
    pub students: Vec<StudentId>,
    pub teachers: Vec<TeacherId>,
}

impl Course {
    /// Whether the given member appears on the requested roster side.
    pub fn roster_contains(&self, side: RosterSide, member: Uuid) -> bool {
        match side {
            RosterSide::Students => self.students.contains(&StudentId::from_uuid(member)),
            RosterSide::Teachers => self.teachers.contains(&TeacherId::from_uuid(member)),
        }
    }

    /// The requested roster as raw UUIDs.
    pub fn roster(&self, side: RosterSide) -> Vec<Uuid> {
        match side {
            RosterSide::Students => self.students.iter().map(|id| id.as_uuid()).collect(),
            RosterSide::Teachers => self.teachers.iter().map(|id| id.as_uuid()).collect(),
        }
    }

    /// Add a member to the requested roster unless already present.
    pub fn roster_add(&mut self, side: RosterSide, member: Uuid) {
        match side {
            RosterSide::Students => {
                let id = StudentId::from_uuid(member);
                if !self.students.contains(&id) {
                    self.students.push(id);
                }
            }
            RosterSide::Teachers => {
                let id = TeacherId::from_uuid(member);
                if !self.teachers.contains(&id) {
                    self.teachers.push(id);
                }
            }
        }
    }

    /// Remove a member from the requested roster if present.
    pub fn roster_remove(&mut self, side: RosterSide, member: Uuid) {
        match side {
            RosterSide::Students => {
                self.students.retain(|id| id.as_uuid() != member);
            }
            RosterSide::Teachers => {
                self.teachers.retain(|id| id.as_uuid() != member);
            }
        }
    }

    /// Apply a scalar-field update in place. Rosters are never touched here.
    pub fn apply_update(&mut self, update: CourseUpdate) {
        let CourseUpdate { name, description } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
    }
}

/// Fields for creating a course; rosters start empty and the store assigns
/// the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub name: CourseName,
    pub description: CourseDescription,
}

/// Partial update for a course's scalar fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseUpdate {
    pub name: Option<CourseName>,
    pub description: Option<CourseDescription>,
}

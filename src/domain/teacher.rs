//! Teacher entity and its change descriptors.

use serde::{Deserialize, Serialize};

use crate::domain::fields::{EmailAddress, PersonName};
use crate::domain::ids::{CourseId, TeacherId};

/// A teacher record.
///
/// Mirrors [`crate::domain::Student`] with an additional contact email;
/// `courses` follows the same set semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub courses: Vec<CourseId>,
}

impl Teacher {
    /// Whether the teacher currently references the given course.
    pub fn has_course(&self, course: &CourseId) -> bool {
        self.courses.contains(course)
    }

    /// Add a course reference unless already present.
    pub fn add_course(&mut self, course: CourseId) {
        if !self.courses.contains(&course) {
            self.courses.push(course);
        }
    }

    /// Remove a course reference if present.
    pub fn remove_course(&mut self, course: &CourseId) {
        self.courses.retain(|existing| existing != course);
    }

    /// Apply an update in place; a supplied `courses` list replaces the set.
    pub fn apply_update(&mut self, update: TeacherUpdate) {
        let TeacherUpdate {
            first_name,
            last_name,
            email,
            courses,
        } = update;
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(courses) = courses {
            self.courses = courses;
        }
    }
}

/// Fields for creating a teacher; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeacher {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub courses: Vec<CourseId>,
}

/// Partial update for a teacher; `Some` courses replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherUpdate {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub email: Option<EmailAddress>,
    pub courses: Option<Vec<CourseId>>,
}

impl TeacherUpdate {
    /// Whether the update replaces the course set.
    pub fn replaces_courses(&self) -> bool {
        self.courses.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Teacher {
        Teacher {
            id: TeacherId::random(),
            first_name: PersonName::new("Grace").expect("valid name"),
            last_name: PersonName::new("Hopper").expect("valid name"),
            email: EmailAddress::new("grace@navy.mil").expect("valid email"),
            courses: Vec::new(),
        }
    }

    #[rstest]
    fn add_course_is_idempotent() {
        let mut teacher = sample();
        let course = CourseId::random();
        teacher.add_course(course);
        teacher.add_course(course);
        assert_eq!(teacher.courses, vec![course]);
    }

    #[rstest]
    fn update_changes_only_supplied_fields() {
        let mut teacher = sample();
        let before = teacher.clone();
        teacher.apply_update(TeacherUpdate {
            email: Some(EmailAddress::new("hopper@school.edu").expect("valid email")),
            ..TeacherUpdate::default()
        });
        assert_eq!(teacher.first_name, before.first_name);
        assert_eq!(teacher.email.as_ref(), "hopper@school.edu");
    }
}

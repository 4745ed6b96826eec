//! Student entity and its change descriptors.

use serde::{Deserialize, Serialize};

use crate::domain::fields::PersonName;
use crate::domain::ids::{CourseId, StudentId};

/// A student record.
///
/// `courses` is a set of course identifiers maintained with add-if-absent
/// semantics; the mirrored `students` entry on each referenced course is
/// kept consistent by the roster maintainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub courses: Vec<CourseId>,
}

impl Student {
    /// Whether the student currently references the given course.
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

    /// Apply an update in place. A supplied `courses` list replaces the
    /// entire set; it is not a diff.
    pub fn apply_update(&mut self, update: StudentUpdate) {
        let StudentUpdate {
            first_name,
            last_name,
            courses,
        } = update;
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(courses) = courses {
            self.courses = courses;
        }
    }
}

/// Fields for creating a student; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub courses: Vec<CourseId>,
}

/// Partial update for a student. `None` fields are left untouched;
/// a `Some` courses list carries full-replacement semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentUpdate {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub courses: Option<Vec<CourseId>>,
}

impl StudentUpdate {
    /// Whether the update replaces the course set.
    pub fn replaces_courses(&self) -> bool {
        self.courses.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Student {
        Student {
            id: StudentId::random(),
            first_name: PersonName::new("Al").expect("valid name"),
            last_name: PersonName::new("Lee").expect("valid name"),
            courses: Vec::new(),
        }
    }

    #[rstest]
    fn add_course_is_idempotent() {
        let mut student = sample();
        let course = CourseId::random();
        student.add_course(course);
        student.add_course(course);
        assert_eq!(student.courses, vec![course]);
    }

    #[rstest]
    fn remove_course_tolerates_absent_values() {
        let mut student = sample();
        student.remove_course(&CourseId::random());
        assert!(student.courses.is_empty());
    }

    #[rstest]
    fn update_with_courses_replaces_the_whole_set() {
        let mut student = sample();
        student.add_course(CourseId::random());
        let replacement = vec![CourseId::random(), CourseId::random()];
        student.apply_update(StudentUpdate {
            courses: Some(replacement.clone()),
            ..StudentUpdate::default()
        });
        assert_eq!(student.courses, replacement);
    }

    #[rstest]
    fn update_without_fields_changes_nothing() {
        let mut student = sample();
        let before = student.clone();
        student.apply_update(StudentUpdate::default());
        assert_eq!(student, before);
    }

    #[rstest]
    fn serialises_with_camel_case_keys() {
        let student = sample();
        let value = serde_json::to_value(&student).expect("serialise student");
        assert!(value.get("firstName").is_some());
        assert!(value.get("lastName").is_some());
    }
}

//! Record store adapters.
//!
//! The in-memory collection implements the generic record-store contract;
//! one adapter per repository port exposes a typed facade over it. A
//! durable document database adapter would implement the same ports.

mod memory;
mod memory_course_repository;
mod memory_student_repository;
mod memory_teacher_repository;

pub use memory::{Document, MemoryCollection};
pub use memory_course_repository::MemoryCourseRepository;
pub use memory_student_repository::MemoryStudentRepository;
pub use memory_teacher_repository::MemoryTeacherRepository;

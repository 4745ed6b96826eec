//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON shape of their corresponding domain types
//! and live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested entity does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A peer update failed after the primary write succeeded.
    #[schema(rename = "propagation_failed")]
    PropagationFailed,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Student not found")]
    error: String,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Student`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Student, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct StudentSchema {
    /// Stable student identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(value_type = String, example = "Ada")]
    first_name: String,
    #[schema(value_type = String, example = "Byron")]
    last_name: String,
    /// Identifiers of the courses the student is enrolled in.
    #[schema(value_type = Vec<String>)]
    courses: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::Teacher`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Teacher, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TeacherSchema {
    /// Stable teacher identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(value_type = String, example = "Joan")]
    first_name: String,
    #[schema(value_type = String, example = "Clarke")]
    last_name: String,
    #[schema(value_type = String, example = "joan@example.org")]
    email: String,
    /// Identifiers of the courses the teacher delivers.
    #[schema(value_type = Vec<String>)]
    courses: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::Course`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Course, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CourseSchema {
    /// Stable course identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(value_type = String, example = "Databases")]
    name: String,
    #[schema(value_type = String, example = "Storage systems and query engines")]
    description: String,
    /// Identifiers of enrolled students.
    #[schema(value_type = Vec<String>)]
    students: Vec<String>,
    /// Identifiers of assigned teachers.
    #[schema(value_type = Vec<String>)]
    teachers: Vec<String>,
}

/// Envelope schema for a single student response.
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct StudentEnvelope {
    data: StudentSchema,
}

/// Envelope schema for a student list response.
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct StudentListEnvelope {
    data: Vec<StudentSchema>,
}

/// Envelope schema for a single teacher response.
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TeacherEnvelope {
    data: TeacherSchema,
}

/// Envelope schema for a teacher list response.
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TeacherListEnvelope {
    data: Vec<TeacherSchema>,
}

/// Envelope schema for a single course response.
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CourseEnvelope {
    data: CourseSchema,
}

/// Envelope schema for a course list response.
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CourseListEnvelope {
    data: Vec<CourseSchema>,
}

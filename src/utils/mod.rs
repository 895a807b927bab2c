pub mod jwt;
pub mod pagination;
pub mod student_code;
pub mod tracing;

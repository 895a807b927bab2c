pub mod calendar_repository;
pub mod course_repository;
pub mod event_repository;
pub mod grade_repository;
pub mod message_repository;
pub mod notification_repository;
pub mod parent_repository;
pub mod student_repository;
pub mod teacher_repository;
pub mod user_repository;

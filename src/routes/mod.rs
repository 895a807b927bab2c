pub mod attendance;
pub mod auth;
pub mod calendar;
pub mod courses;
pub mod events;
pub mod grades;
pub mod health;
pub mod messages;
pub mod notifications;
pub mod parents;
pub mod students;
pub mod teachers;

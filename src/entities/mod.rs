pub mod calendar;
pub mod course;
pub mod event;
pub mod grade;
pub mod message;
pub mod notification;
pub mod parent;
pub mod sea_orm_active_enums;
pub mod shared;
pub mod student;
pub mod teacher;
pub mod user;

pub mod dto;
pub mod route;

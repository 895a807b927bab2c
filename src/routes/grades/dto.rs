use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::grade;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertScoreRequest {
    pub term: String,
    pub academic_year: String,
    pub title: String,
    pub score: f64,
    pub max_score: f64,
    pub weight: f64,
    pub date: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub comments: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradeListResponse {
    pub data: Vec<grade::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GpaResponse {
    pub term: String,
    pub academic_year: String,
    pub gpa: f64,
    pub course_count: usize,
}

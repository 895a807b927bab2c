use axum::{
    Json, Router,
    extract::Path,
    routing::{get, post, put},
};
use uuid::Uuid;

use super::dto::{
    AttendanceSummary, ChildInfo, ChildProgress, ChildReport, LinkChildRequest,
    UpdateNotificationsRequest, UpdateParentProfileRequest,
};
use crate::access::{Actor, parent_owns_child};
use crate::entities::parent;
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::student::AttendanceStatus;
use crate::entities::user;
use crate::error::ApiError;
use crate::extractor::AuthUser;
use crate::repositories::event_repository::EventRepository;
use crate::repositories::grade_repository::GradeRepository;
use crate::repositories::parent_repository::ParentRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;

pub fn create_route() -> Router {
    Router::new()
        .route(
            "/api/v1/parents/profile",
            get(get_profile).put(update_profile),
        )
        .route("/api/v1/parents/children", post(link_child))
        .route("/api/v1/parents/children/progress", get(children_progress))
        .route(
            "/api/v1/parents/children/{child_id}/report",
            get(child_report),
        )
        .route("/api/v1/parents/notifications", put(update_notifications))
}

fn require_parent(actor: &Actor) -> Result<(), ApiError> {
    if actor.role != RoleEnum::Parent {
        return Err(ApiError::forbidden("Access denied"));
    }
    Ok(())
}

fn child_info(child: &user::Model) -> ChildInfo {
    ChildInfo {
        user_id: child.user_id,
        name: child.full_name(),
        grade: child.grade.clone(),
        section: child.section.clone(),
        student_code: child.student_code.clone(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/parents/profile",
    responses(
        (status = 200, description = "Parent profile", body = parent::Model),
        (status = 403, description = "Parent only"),
        (status = 404, description = "Parent profile not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Parents"
)]
pub async fn get_profile(AuthUser(actor): AuthUser) -> Result<Json<parent::Model>, ApiError> {
    require_parent(&actor)?;
    let parent = ParentRepository::new()
        .find_by_user_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Parent profile not found"))?;
    Ok(Json(parent))
}

#[utoipa::path(
    put,
    path = "/api/v1/parents/profile",
    request_body = UpdateParentProfileRequest,
    responses(
        (status = 200, description = "Parent profile saved; created on first update", body = parent::Model),
        (status = 403, description = "Parent only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Parents"
)]
pub async fn update_profile(
    AuthUser(actor): AuthUser,
    Json(payload): Json<UpdateParentProfileRequest>,
) -> Result<Json<parent::Model>, ApiError> {
    require_parent(&actor)?;

    let repo = ParentRepository::new();
    let mut parent = match repo.find_by_user_id(actor.id).await? {
        Some(parent) => parent,
        None => {
            repo.create(
                actor.id,
                payload.relationship.clone().unwrap_or_default(),
                None,
                None,
                payload
                    .preferred_language
                    .clone()
                    .unwrap_or_else(|| "en".to_string()),
            )
            .await?
        }
    };

    if let Some(relationship) = payload.relationship {
        parent.relationship = relationship;
    }
    if payload.occupation.is_some() {
        parent.occupation = payload.occupation;
    }
    if payload.work_phone.is_some() {
        parent.work_phone = payload.work_phone;
    }
    if payload.emergency_contact.is_some() {
        parent.emergency_contact = payload.emergency_contact;
    }
    if payload.address.is_some() {
        parent.address = payload.address;
    }
    if let Some(preferred_language) = payload.preferred_language {
        parent.preferred_language = preferred_language;
    }

    let saved = repo.save(parent).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post,
    path = "/api/v1/parents/children",
    request_body = LinkChildRequest,
    responses(
        (status = 200, description = "Child linked", body = parent::Model),
        (status = 400, description = "Child already linked"),
        (status = 403, description = "Parent only"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Parents"
)]
pub async fn link_child(
    AuthUser(actor): AuthUser,
    Json(payload): Json<LinkChildRequest>,
) -> Result<Json<parent::Model>, ApiError> {
    require_parent(&actor)?;

    let repo = ParentRepository::new();
    let mut parent = repo
        .find_by_user_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Parent profile not found"))?;

    let child = UserRepository::new()
        .find_student_by_code(&payload.student_code)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    if parent.children.contains(child.user_id) {
        return Err(ApiError::bad_request("Child already linked"));
    }
    parent.children.0.push(child.user_id);

    let saved = repo.save(parent).await?;
    Ok(Json(saved))
}

async fn progress_for_child(child: &user::Model) -> Result<ChildProgress, ApiError> {
    let student = StudentRepository::new().find_by_user_id(child.user_id).await?;

    let (attendance, recent_grades) = match student {
        Some(student) => {
            let grades = GradeRepository::new()
                .find_by_student(student.student_id)
                .await?
                .into_iter()
                .take(10)
                .collect();
            let records = &student.attendance.0;
            let count = |status: AttendanceStatus| {
                records.iter().filter(|a| a.status == status).count() as u64
            };
            (
                AttendanceSummary {
                    total: records.len() as u64,
                    present: count(AttendanceStatus::Present),
                    absent: count(AttendanceStatus::Absent),
                    late: count(AttendanceStatus::Late),
                },
                grades,
            )
        }
        None => (
            AttendanceSummary {
                total: 0,
                present: 0,
                absent: 0,
                late: 0,
            },
            vec![],
        ),
    };

    Ok(ChildProgress {
        student: child_info(child),
        attendance,
        recent_grades,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/parents/children/progress",
    responses(
        (status = 200, description = "Progress for every linked child", body = [ChildProgress]),
        (status = 403, description = "Parent only"),
        (status = 404, description = "Parent profile not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Parents"
)]
pub async fn children_progress(
    AuthUser(actor): AuthUser,
) -> Result<Json<Vec<ChildProgress>>, ApiError> {
    require_parent(&actor)?;

    let parent = ParentRepository::new()
        .find_by_user_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Parent profile not found"))?;

    let children = UserRepository::new()
        .find_many_by_ids(&parent.children.0)
        .await?;

    let mut progress = Vec::with_capacity(children.len());
    for child in &children {
        progress.push(progress_for_child(child).await?);
    }
    Ok(Json(progress))
}

#[utoipa::path(
    get,
    path = "/api/v1/parents/children/{child_id}/report",
    params(("child_id" = Uuid, Path, description = "Child user id")),
    responses(
        (status = 200, description = "Detailed report for a linked child", body = ChildReport),
        (status = 403, description = "Child is not linked to the caller"),
        (status = 404, description = "Parent profile or child not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Parents"
)]
pub async fn child_report(
    AuthUser(actor): AuthUser,
    Path(child_id): Path<Uuid>,
) -> Result<Json<ChildReport>, ApiError> {
    require_parent(&actor)?;

    let parent = ParentRepository::new()
        .find_by_user_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Parent profile not found"))?;

    if !parent_owns_child(&parent, child_id) {
        return Err(ApiError::forbidden(
            "Not authorized to view this child's report",
        ));
    }

    let child = UserRepository::new()
        .find_active_by_id(child_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Child not found"))?;

    let student = StudentRepository::new().find_by_user_id(child_id).await?;
    let (attendance, grades) = match &student {
        Some(student) => (
            student.attendance.0.clone(),
            GradeRepository::new()
                .find_by_student(student.student_id)
                .await?,
        ),
        None => (vec![], vec![]),
    };
    let upcoming_events = EventRepository::new()
        .find_upcoming_for_participant(child_id)
        .await?;

    Ok(Json(ChildReport {
        student: child_info(&child),
        attendance,
        grades,
        upcoming_events,
    }))
}

#[utoipa::path(
    put,
    path = "/api/v1/parents/notifications",
    request_body = UpdateNotificationsRequest,
    responses(
        (status = 200, description = "Notification preferences updated", body = parent::Model),
        (status = 403, description = "Parent only"),
        (status = 404, description = "Parent profile not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Parents"
)]
pub async fn update_notifications(
    AuthUser(actor): AuthUser,
    Json(payload): Json<UpdateNotificationsRequest>,
) -> Result<Json<parent::Model>, ApiError> {
    require_parent(&actor)?;

    let repo = ParentRepository::new();
    let mut parent = repo
        .find_by_user_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Parent profile not found"))?;
    parent.notification_preferences = payload.notifications;

    let saved = repo.save(parent).await?;
    Ok(Json(saved))
}

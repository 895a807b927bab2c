use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::entities::{
    calendar, course, event, grade, message, notification, parent, student, teacher, user,
};
use crate::error::FieldError;
use crate::grading::{LetterGrade, ScoreItem};
use crate::routes;
use crate::utils::pagination::{PageQuery, Pagination};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::route::health,
        routes::auth::route::register,
        routes::auth::route::login,
        routes::auth::route::me,
        routes::auth::route::verify,
        routes::students::route::create_student,
        routes::students::route::list_students,
        routes::students::route::dashboard,
        routes::students::route::get_student,
        routes::students::route::update_student,
        routes::students::route::enroll_course,
        routes::students::route::update_enrollment_status,
        routes::teachers::route::create_teacher,
        routes::teachers::route::list_teachers,
        routes::teachers::route::get_teacher,
        routes::teachers::route::update_teacher,
        routes::teachers::route::delete_teacher,
        routes::teachers::route::upsert_schedule,
        routes::teachers::route::teacher_courses,
        routes::courses::route::create_course,
        routes::courses::route::list_courses,
        routes::courses::route::get_course,
        routes::courses::route::update_course,
        routes::courses::route::delete_course,
        routes::courses::route::enroll_student,
        routes::courses::route::unenroll_student,
        routes::attendance::route::record_attendance,
        routes::attendance::route::get_attendance,
        routes::attendance::route::update_attendance,
        routes::grades::route::list_grades,
        routes::grades::route::get_grade,
        routes::grades::route::upsert_assignment,
        routes::grades::route::upsert_exam,
        routes::grades::route::get_gpa,
        routes::grades::route::add_comment,
        routes::events::route::create_event,
        routes::events::route::list_events,
        routes::events::route::get_event,
        routes::events::route::update_event,
        routes::events::route::delete_event,
        routes::events::route::register,
        routes::events::route::unregister,
        routes::calendar::route::create_calendar,
        routes::calendar::route::list_calendars,
        routes::calendar::route::get_calendar,
        routes::calendar::route::update_calendar,
        routes::calendar::route::delete_calendar,
        routes::calendar::route::create_event,
        routes::calendar::route::update_event,
        routes::calendar::route::delete_event,
        routes::calendar::route::respond_to_event,
        routes::messages::route::send_message,
        routes::messages::route::inbox,
        routes::messages::route::sent,
        routes::messages::route::get_message,
        routes::messages::route::delete_message,
        routes::messages::route::list_announcements,
        routes::messages::route::create_announcement,
        routes::notifications::route::list_notifications,
        routes::notifications::route::mark_read,
        routes::notifications::route::mark_all_read,
        routes::notifications::route::archive,
        routes::notifications::route::bulk_delete,
        routes::notifications::route::get_preferences,
        routes::notifications::route::update_preferences,
        routes::parents::route::get_profile,
        routes::parents::route::update_profile,
        routes::parents::route::link_child,
        routes::parents::route::children_progress,
        routes::parents::route::child_report,
        routes::parents::route::update_notifications,
    ),
    components(schemas(
        FieldError,
        PageQuery,
        Pagination,
        LetterGrade,
        ScoreItem,
        user::Model,
        student::Model,
        teacher::Model,
        course::Model,
        grade::Model,
        calendar::Model,
        event::Model,
        message::Model,
        notification::Model,
        parent::Model,
        routes::health::route::HealthResponse,
        routes::auth::dto::RegisterRequest,
        routes::auth::dto::LoginRequest,
        routes::auth::dto::UserInfo,
        routes::auth::dto::AuthResponse,
        routes::auth::dto::VerifyResponse,
        routes::students::dto::CreateStudentRequest,
        routes::students::dto::UpdateStudentRequest,
        routes::students::dto::EnrollmentStatusRequest,
        routes::students::dto::StudentResponse,
        routes::students::dto::StudentListResponse,
        routes::students::dto::CourseAttendance,
        routes::students::dto::DashboardResponse,
        routes::teachers::dto::CreateTeacherRequest,
        routes::teachers::dto::UpdateTeacherRequest,
        routes::teachers::dto::UpsertScheduleRequest,
        routes::teachers::dto::TeacherResponse,
        routes::teachers::dto::TeacherListResponse,
        routes::teachers::dto::TeacherCoursesResponse,
        routes::courses::dto::CreateCourseRequest,
        routes::courses::dto::UpdateCourseRequest,
        routes::courses::dto::EnrollRequest,
        routes::courses::dto::CourseListResponse,
        routes::attendance::dto::RecordAttendanceRequest,
        routes::attendance::dto::UpdateAttendanceRequest,
        routes::attendance::dto::AttendanceResponse,
        routes::grades::dto::UpsertScoreRequest,
        routes::grades::dto::CommentRequest,
        routes::grades::dto::GradeListResponse,
        routes::grades::dto::GpaResponse,
        routes::events::dto::CreateEventRequest,
        routes::events::dto::UpdateEventRequest,
        routes::events::dto::EventListResponse,
        routes::calendar::dto::CreateCalendarRequest,
        routes::calendar::dto::UpdateCalendarRequest,
        routes::calendar::dto::CreateCalendarEventRequest,
        routes::calendar::dto::UpdateCalendarEventRequest,
        routes::calendar::dto::RespondStatus,
        routes::calendar::dto::RespondRequest,
        routes::calendar::dto::CalendarListResponse,
        routes::messages::dto::SendMessageRequest,
        routes::messages::dto::AnnouncementRequest,
        routes::messages::dto::MessageListResponse,
        routes::messages::dto::DeleteMessageResponse,
        routes::notifications::dto::BulkDeleteRequest,
        routes::notifications::dto::NotificationListResponse,
        routes::notifications::dto::AffectedResponse,
        routes::notifications::dto::PreferencesResponse,
        routes::parents::dto::UpdateParentProfileRequest,
        routes::parents::dto::LinkChildRequest,
        routes::parents::dto::UpdateNotificationsRequest,
        routes::parents::dto::ChildInfo,
        routes::parents::dto::AttendanceSummary,
        routes::parents::dto::ChildProgress,
        routes::parents::dto::ChildReport,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Authentication", description = "Registration, login, and token verification"),
        (name = "Students", description = "Student profiles, enrollment, and dashboard"),
        (name = "Teachers", description = "Teacher profiles and schedules"),
        (name = "Courses", description = "Course catalog and rosters"),
        (name = "Attendance", description = "Per-course attendance records"),
        (name = "Grades", description = "Scores, final grades, and GPA"),
        (name = "Events", description = "School-wide events and registration"),
        (name = "Calendar", description = "Academic calendars with embedded events"),
        (name = "Messages", description = "Direct messages and announcements"),
        (name = "Notifications", description = "Per-user notification feed"),
        (name = "Parents", description = "Parent portal and child reports"),
    )
)]
pub struct ApiDoc;

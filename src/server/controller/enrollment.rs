use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageQuery},
        course::PaginatedCoursesDto,
        enrollment::{CourseStudentDto, EnrollmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{enrollment::CourseStudent, pagination::PageRequest},
        service::enrollment::EnrollmentService,
        state::AppState,
    },
};

/// Tag for grouping enrollment endpoints in OpenAPI documentation
pub static ENROLLMENT_TAG: &str = "enrollment";

/// Enroll the logged-in student into a course.
///
/// # Access Control
/// - `Student`
///
/// # Returns
/// - `201 Created` - Enrolled
/// - `404 Not Found` - Course not found
/// - `409 Conflict` - Already enrolled, course started or course full
#[utoipa::path(
    post,
    path = "/api/courses/{id}/enroll",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 201, description = "Enrolled", body = EnrollmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "Already enrolled, started or full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enroll(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let service = EnrollmentService::new(&state.db);

    let enrollment = service.enroll(&student.id_card, id).await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_dto(student.id_card))))
}

/// Drop a course the logged-in student is enrolled in.
///
/// # Access Control
/// - `Student`
///
/// # Returns
/// - `204 No Content` - Dropped
/// - `404 Not Found` - Course not found or not enrolled
/// - `409 Conflict` - Course already started
#[utoipa::path(
    delete,
    path = "/api/courses/{id}/enroll",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Dropped"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 404, description = "Course not found or not enrolled", body = ErrorDto),
        (status = 409, description = "Course already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn drop_course(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    EnrollmentService::new(&state.db)
        .drop_course(&student.id_card, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the logged-in student's enrolled courses.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/api/student/courses",
    tag = ENROLLMENT_TAG,
    params(
        ("page" = Option<String>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<String>, Query, description = "Items per page (default: 10)"),
        ("sort_by" = Option<String>, Query, description = "id, hours or startdate"),
        ("sort_order" = Option<String>, Query, description = "ASC or DESC")
    ),
    responses(
        (status = 200, description = "Enrolled courses", body = PaginatedCoursesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_courses(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let courses = EnrollmentService::new(&state.db)
        .list_student_courses(&student.id_card, PageRequest::from_query(&query))
        .await?;

    Ok((StatusCode::OK, Json(courses.into_dto())))
}

/// List the students enrolled in a course.
///
/// # Access Control
/// - `Teacher`
#[utoipa::path(
    get,
    path = "/api/courses/{id}/students",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrolled students", body = Vec<CourseStudentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a teacher", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_students(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let students: Vec<CourseStudentDto> = EnrollmentService::new(&state.db)
        .list_course_students(id)
        .await?
        .into_iter()
        .map(CourseStudent::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(students)))
}

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
        course::{
            CourseDetailsDto, CourseDto, CourseListQuery, CreateCourseDto, PaginatedCoursesDto,
            UpdateCourseDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            course::{CourseFilter, CreateCourseParams, UpdateCourseParams},
            pagination::PageRequest,
        },
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List current-semester courses.
///
/// Public. Filters combine; `teacher_name` matches a substring of the teacher's name.
///
/// # Returns
/// - `200 OK` - One page of courses
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    params(
        ("page" = Option<String>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<String>, Query, description = "Items per page, 5 to 100 (default: 10)"),
        ("sort_by" = Option<String>, Query, description = "id, hours or startdate (default: id)"),
        ("sort_order" = Option<String>, Query, description = "ASC or DESC (default: ASC)"),
        ("name" = Option<String>, Query, description = "Substring of the course name"),
        ("teacher_name" = Option<String>, Query, description = "Substring of the teacher's name"),
        ("teacher_id" = Option<String>, Query, description = "Exact id_card of the teacher")
    ),
    responses(
        (status = 200, description = "Courses of the current semester", body = PaginatedCoursesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db, state.rules);

    let page = PageRequest::from_raw(
        query.page.as_deref(),
        query.page_size.as_deref(),
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
    );

    let courses = service.list(CourseFilter::from_query(&query), page).await?;

    Ok((StatusCode::OK, Json(courses.into_dto())))
}

/// List the logged-in teacher's courses in the current semester.
///
/// # Access Control
/// - `Teacher`
#[utoipa::path(
    get,
    path = "/api/courses/my",
    tag = COURSE_TAG,
    params(
        ("page" = Option<String>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<String>, Query, description = "Items per page (default: 10)"),
        ("sort_by" = Option<String>, Query, description = "id, hours or startdate"),
        ("sort_order" = Option<String>, Query, description = "ASC or DESC")
    ),
    responses(
        (status = 200, description = "The teacher's courses", body = PaginatedCoursesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_courses(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db, state.rules);

    let courses = service
        .list_for_teacher(Some(&teacher.id_card), PageRequest::from_query(&query))
        .await?;

    Ok((StatusCode::OK, Json(courses.into_dto())))
}

/// Create a course owned by the logged-in teacher.
///
/// # Access Control
/// - `Teacher`
///
/// # Returns
/// - `201 Created` - Course created
/// - `400 Bad Request` - Invalid date, semester or field
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in as a teacher
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db, state.rules);

    let course = service
        .create(Some(&teacher.id_card), CreateCourseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Get one course with its enrolled count.
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The course", body = CourseDetailsDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db, state.rules);

    let (course, enrolled) = service.get(id).await?;

    Ok((StatusCode::OK, Json(course.into_details_dto(enrolled))))
}

/// Update a course owned by the logged-in teacher.
///
/// Omitted fields are left unchanged. Not allowed once the course has started.
///
/// # Access Control
/// - `Teacher` owning the course
///
/// # Returns
/// - `200 OK` - Updated course
/// - `400 Bad Request` - Invalid field, or capacity below current enrollment
/// - `404 Not Found` - No such course owned by the caller
/// - `409 Conflict` - Course already started
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a teacher", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "Course already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db, state.rules);

    let course = service
        .update(
            Some(&teacher.id_card),
            id,
            UpdateCourseParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course owned by the logged-in teacher.
///
/// # Access Control
/// - `Teacher` owning the course
///
/// # Returns
/// - `204 No Content` - Course deleted
/// - `404 Not Found` - No such course owned by the caller
/// - `409 Conflict` - Students enrolled, or course already started
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a teacher", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "Course has students or already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db, state.rules);

    service.delete(Some(&teacher.id_card), id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        admin::{AdminDto, AdminLoginDto, CreateAdminDto, UpdateAdminDto},
        api::ErrorDto,
        course::{
            CourseDetailsDto, CourseDto, CreateCourseDto, PaginatedCoursesDto, UpdateCourseDto,
        },
        enrollment::{CourseStudentDto, EnrollmentDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::{
            admin::{
                self, admin_login, create_admin, delete_admin, get_admin, get_admins,
                update_admin,
            },
            auth::{self, get_user, login, logout, register},
            course::{
                self, create_course, delete_course, get_course, get_courses, get_my_courses,
                update_course,
            },
            enrollment::{self, drop_course, enroll, get_course_students, get_student_courses},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Courseboard API", description = "Course and enrollment management"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        course::get_courses,
        course::get_my_courses,
        course::create_course,
        course::get_course,
        course::update_course,
        course::delete_course,
        enrollment::enroll,
        enrollment::drop_course,
        enrollment::get_student_courses,
        enrollment::get_course_students,
        admin::admin_login,
        admin::get_admins,
        admin::create_admin,
        admin::get_admin,
        admin::update_admin,
        admin::delete_admin,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        RegisterDto,
        LoginDto,
        CourseDto,
        CourseDetailsDto,
        CreateCourseDto,
        UpdateCourseDto,
        PaginatedCoursesDto,
        EnrollmentDto,
        CourseStudentDto,
        AdminDto,
        AdminLoginDto,
        CreateAdminDto,
        UpdateAdminDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/courses", get(get_courses).post(create_course))
        .route("/api/courses/my", get(get_my_courses))
        .route(
            "/api/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/api/courses/{id}/students", get(get_course_students))
        .route("/api/courses/{id}/enroll", post(enroll).delete(drop_course))
        .route("/api/student/courses", get(get_student_courses))
        .route("/api/admin/login", post(admin_login))
        .route("/api/admin/admins", get(get_admins).post(create_admin))
        .route(
            "/api/admin/admins/{id}",
            get(get_admin).put(update_admin).delete(delete_admin),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

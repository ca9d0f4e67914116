use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{AdminDto, AdminLoginDto, CreateAdminDto, UpdateAdminDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::admin::{Admin, UpdateAdminParams},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Log in as an admin with job number and password.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = ADMIN_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Logged in", body = AdminDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AdminService::new(&state.db, state.bcrypt_cost)
        .login(&payload.job_no, &payload.password)
        .await?;

    AuthSession::new(&session).set_admin_id(admin.id).await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

/// List all admins.
///
/// # Access Control
/// - Admin
#[utoipa::path(
    get,
    path = "/api/admin/admins",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All admins", body = Vec<AdminDto>),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admins(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let admins: Vec<AdminDto> = AdminService::new(&state.db, state.bcrypt_cost)
        .get_all()
        .await?
        .into_iter()
        .map(Admin::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(admins)))
}

/// Create an admin.
///
/// # Access Control
/// - Admin
///
/// # Returns
/// - `201 Created` - Admin created
/// - `400 Bad Request` - Missing job number or weak password
/// - `409 Conflict` - Job number taken
#[utoipa::path(
    post,
    path = "/api/admin/admins",
    tag = ADMIN_TAG,
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Admin created", body = AdminDto),
        (status = 400, description = "Invalid admin data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 409, description = "Job number taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let admin = AdminService::new(&state.db, state.bcrypt_cost)
        .create(&payload.job_no, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(admin.into_dto())))
}

/// Get one admin.
#[utoipa::path(
    get,
    path = "/api/admin/admins/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Admin ID")
    ),
    responses(
        (status = 200, description = "The admin", body = AdminDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let admin = AdminService::new(&state.db, state.bcrypt_cost)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

/// Change an admin's job number and/or password.
#[utoipa::path(
    put,
    path = "/api/admin/admins/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Admin ID")
    ),
    request_body = UpdateAdminDto,
    responses(
        (status = 200, description = "Admin updated", body = AdminDto),
        (status = 400, description = "Weak password", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 409, description = "Job number taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_admin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let admin = AdminService::new(&state.db, state.bcrypt_cost)
        .update(id, UpdateAdminParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

/// Delete an admin.
#[utoipa::path(
    delete,
    path = "/api/admin/admins/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Admin ID")
    ),
    responses(
        (status = 204, description = "Admin deleted"),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    AdminService::new(&state.db, state.bcrypt_cost)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

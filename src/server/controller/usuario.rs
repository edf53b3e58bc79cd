use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PagedDto},
        usuario::{CreateUsuarioDto, UpdateUsuarioDto, UsuarioDto},
    },
    server::{
        controller::param::{PaginationParam, RequestOrigin},
        error::AppError,
        model::usuario::{SaveUsuarioParam, Usuario},
        service::usuario::UsuarioService,
        state::AppState,
        util::pagination::LinkBuilder,
    },
};

/// Tag for grouping usuario endpoints in OpenAPI documentation
pub static USUARIO_TAG: &str = "usuario";

pub static USUARIOS_PATH: &str = "/api/usuarios";

/// Get paginated usuarios.
///
/// Password hashes are never included in the response.
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = USUARIO_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved usuarios", body = PagedDto<UsuarioDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usuarios(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = UsuarioService::new(&state.db)
        .get_paginated(params.into_request())
        .await?;

    let links = LinkBuilder::new(origin, USUARIOS_PATH);

    Ok((StatusCode::OK, Json(page.into_dto(&links, Usuario::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = USUARIO_TAG,
    params(
        ("id" = i64, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved usuario", body = UsuarioDto),
        (status = 404, description = "Usuario not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = UsuarioService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(usuario.into_dto())))
}

/// Create a new usuario.
///
/// The password is stored as a bcrypt hash.
///
/// # Returns
/// - `201 Created` - The created usuario
/// - `400 Bad Request` - Blank username or password, or username already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = USUARIO_TAG,
    request_body = CreateUsuarioDto,
    responses(
        (status = 201, description = "Successfully created usuario", body = UsuarioDto),
        (status = 400, description = "Invalid usuario data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_usuario(
    State(state): State<AppState>,
    Json(payload): Json<CreateUsuarioDto>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = UsuarioService::new(&state.db)
        .create(SaveUsuarioParam::from_create_dto(payload))
        .await?;

    let location = format!("{}/{}", USUARIOS_PATH, usuario.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(usuario.into_dto()),
    ))
}

/// Update a usuario.
///
/// Omitting the password keeps the current one.
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = USUARIO_TAG,
    params(
        ("id" = i64, Path, description = "Usuario ID")
    ),
    request_body = UpdateUsuarioDto,
    responses(
        (status = 200, description = "Successfully updated usuario", body = UsuarioDto),
        (status = 400, description = "Invalid usuario data", body = ErrorDto),
        (status = 404, description = "Usuario not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUsuarioDto>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = UsuarioService::new(&state.db)
        .update(id, SaveUsuarioParam::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(usuario.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = USUARIO_TAG,
    params(
        ("id" = i64, Path, description = "Usuario ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted usuario"),
        (status = 404, description = "Usuario not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    UsuarioService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

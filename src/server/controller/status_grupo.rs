use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PagedDto},
        status_grupo::{SaveStatusGrupoDto, StatusGrupoDto},
    },
    server::{
        controller::param::{PaginationParam, RequestOrigin},
        error::AppError,
        model::status_grupo::{SaveStatusGrupoParam, StatusGrupo},
        service::status_grupo::StatusGrupoService,
        state::AppState,
        util::pagination::LinkBuilder,
    },
};

/// Tag for grouping status grupo endpoints in OpenAPI documentation
pub static STATUS_GRUPO_TAG: &str = "status_grupo";

pub static STATUS_GRUPOS_PATH: &str = "/api/status-grupos";

#[utoipa::path(
    get,
    path = "/api/status-grupos",
    tag = STATUS_GRUPO_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved status grupos", body = PagedDto<StatusGrupoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status_grupos(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = StatusGrupoService::new(&state.db)
        .get_paginated(params.into_request())
        .await?;

    let links = LinkBuilder::new(origin, STATUS_GRUPOS_PATH);

    Ok((
        StatusCode::OK,
        Json(page.into_dto(&links, StatusGrupo::into_dto)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/status-grupos/{id}",
    tag = STATUS_GRUPO_TAG,
    params(
        ("id" = i64, Path, description = "Status grupo ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved status grupo", body = StatusGrupoDto),
        (status = 404, description = "Status grupo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status_grupo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let grupo = StatusGrupoService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(grupo.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/status-grupos",
    tag = STATUS_GRUPO_TAG,
    request_body = SaveStatusGrupoDto,
    responses(
        (status = 201, description = "Successfully created status grupo", body = StatusGrupoDto),
        (status = 400, description = "Invalid status grupo data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_status_grupo(
    State(state): State<AppState>,
    Json(payload): Json<SaveStatusGrupoDto>,
) -> Result<impl IntoResponse, AppError> {
    let grupo = StatusGrupoService::new(&state.db)
        .create(SaveStatusGrupoParam::from_dto(payload))
        .await?;

    let location = format!("{}/{}", STATUS_GRUPOS_PATH, grupo.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(grupo.into_dto()),
    ))
}

#[utoipa::path(
    put,
    path = "/api/status-grupos/{id}",
    tag = STATUS_GRUPO_TAG,
    params(
        ("id" = i64, Path, description = "Status grupo ID")
    ),
    request_body = SaveStatusGrupoDto,
    responses(
        (status = 200, description = "Successfully updated status grupo", body = StatusGrupoDto),
        (status = 400, description = "Invalid status grupo data", body = ErrorDto),
        (status = 404, description = "Status grupo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status_grupo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SaveStatusGrupoDto>,
) -> Result<impl IntoResponse, AppError> {
    let grupo = StatusGrupoService::new(&state.db)
        .update(id, SaveStatusGrupoParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(grupo.into_dto())))
}

/// Delete a status grupo.
///
/// Refused while the grupo owns any status.
#[utoipa::path(
    delete,
    path = "/api/status-grupos/{id}",
    tag = STATUS_GRUPO_TAG,
    params(
        ("id" = i64, Path, description = "Status grupo ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted status grupo"),
        (status = 400, description = "Status grupo still owns statuses", body = ErrorDto),
        (status = 404, description = "Status grupo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_status_grupo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    StatusGrupoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

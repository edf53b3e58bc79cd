use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PagedDto},
        status::{SaveStatusDto, StatusDto},
    },
    server::{
        controller::param::{PaginationParam, RequestOrigin},
        error::AppError,
        model::status::{SaveStatusParam, Status},
        service::status::StatusService,
        state::AppState,
        util::pagination::LinkBuilder,
    },
};

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

pub static STATUS_PATH: &str = "/api/status";

/// Get paginated statuses, each with its grupo.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = STATUS_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved statuses", body = PagedDto<StatusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statuses(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = StatusService::new(&state.db)
        .get_paginated(params.into_request())
        .await?;

    let links = LinkBuilder::new(origin, STATUS_PATH);

    Ok((StatusCode::OK, Json(page.into_dto(&links, Status::into_dto))))
}

/// Get a status by id, with its grupo.
#[utoipa::path(
    get,
    path = "/api/status/{id}",
    tag = STATUS_TAG,
    params(
        ("id" = i64, Path, description = "Status ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved status", body = StatusDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Create a new status in an existing grupo.
#[utoipa::path(
    post,
    path = "/api/status",
    tag = STATUS_TAG,
    request_body = SaveStatusDto,
    responses(
        (status = 201, description = "Successfully created status", body = StatusDto),
        (status = 400, description = "Invalid status data or unknown grupo", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_status(
    State(state): State<AppState>,
    Json(payload): Json<SaveStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db)
        .create(SaveStatusParam::from_dto(payload))
        .await?;

    let location = format!("{}/{}", STATUS_PATH, status.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(status.into_dto()),
    ))
}

#[utoipa::path(
    put,
    path = "/api/status/{id}",
    tag = STATUS_TAG,
    params(
        ("id" = i64, Path, description = "Status ID")
    ),
    request_body = SaveStatusDto,
    responses(
        (status = 200, description = "Successfully updated status", body = StatusDto),
        (status = 400, description = "Invalid status data or unknown grupo", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SaveStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db)
        .update(id, SaveStatusParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Delete a status. Refused while any moto is in it.
#[utoipa::path(
    delete,
    path = "/api/status/{id}",
    tag = STATUS_TAG,
    params(
        ("id" = i64, Path, description = "Status ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted status"),
        (status = 400, description = "Status still has motos", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    StatusService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

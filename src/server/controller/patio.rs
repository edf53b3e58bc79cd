use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PagedDto},
        patio::{PatioDto, SavePatioDto},
    },
    server::{
        controller::param::{PaginationParam, RequestOrigin},
        error::AppError,
        model::patio::{Patio, SavePatioParam},
        service::patio::PatioService,
        state::AppState,
        util::pagination::LinkBuilder,
    },
};

/// Tag for grouping patio endpoints in OpenAPI documentation
pub static PATIO_TAG: &str = "patio";

pub static PATIOS_PATH: &str = "/api/patios";

/// Get paginated patios.
#[utoipa::path(
    get,
    path = "/api/patios",
    tag = PATIO_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved patios", body = PagedDto<PatioDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patios(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = PatioService::new(&state.db)
        .get_paginated(params.into_request())
        .await?;

    let links = LinkBuilder::new(origin, PATIOS_PATH);

    Ok((StatusCode::OK, Json(page.into_dto(&links, Patio::into_dto))))
}

/// Get a patio by id.
#[utoipa::path(
    get,
    path = "/api/patios/{id}",
    tag = PATIO_TAG,
    params(
        ("id" = i64, Path, description = "Patio ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved patio", body = PatioDto),
        (status = 404, description = "Patio not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let patio = PatioService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(patio.into_dto())))
}

/// Create a new patio.
#[utoipa::path(
    post,
    path = "/api/patios",
    tag = PATIO_TAG,
    request_body = SavePatioDto,
    responses(
        (status = 201, description = "Successfully created patio", body = PatioDto),
        (status = 400, description = "Invalid patio data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_patio(
    State(state): State<AppState>,
    Json(payload): Json<SavePatioDto>,
) -> Result<impl IntoResponse, AppError> {
    let patio = PatioService::new(&state.db)
        .create(SavePatioParam::from_dto(payload))
        .await?;

    let location = format!("{}/{}", PATIOS_PATH, patio.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(patio.into_dto()),
    ))
}

/// Update a patio.
#[utoipa::path(
    put,
    path = "/api/patios/{id}",
    tag = PATIO_TAG,
    params(
        ("id" = i64, Path, description = "Patio ID")
    ),
    request_body = SavePatioDto,
    responses(
        (status = 200, description = "Successfully updated patio", body = PatioDto),
        (status = 400, description = "Invalid patio data", body = ErrorDto),
        (status = 404, description = "Patio not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_patio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SavePatioDto>,
) -> Result<impl IntoResponse, AppError> {
    let patio = PatioService::new(&state.db)
        .update(id, SavePatioParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(patio.into_dto())))
}

/// Delete a patio. Refused while any moto is stored in it.
#[utoipa::path(
    delete,
    path = "/api/patios/{id}",
    tag = PATIO_TAG,
    params(
        ("id" = i64, Path, description = "Patio ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted patio"),
        (status = 400, description = "Patio still has motos", body = ErrorDto),
        (status = 404, description = "Patio not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_patio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    PatioService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

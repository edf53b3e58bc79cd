use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PagedDto},
        zona::{SaveZonaDto, ZonaDto},
    },
    server::{
        controller::param::{PaginationParam, RequestOrigin},
        error::AppError,
        model::zona::{SaveZonaParam, Zona},
        service::zona::ZonaService,
        state::AppState,
        util::pagination::LinkBuilder,
    },
};

/// Tag for grouping zona endpoints in OpenAPI documentation
pub static ZONA_TAG: &str = "zona";

/// Base path of the zona resource
pub static ZONAS_PATH: &str = "/api/zonas";

/// Get paginated zonas.
///
/// Returns zonas ordered by id together with `self`, `prev` and `next` links
/// that point at neighbouring pages.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `origin` - Scheme and host used to render absolute links
/// - `params` - Pagination parameters (page and pageSize)
///
/// # Returns
/// - `200 OK` - Page of zonas with navigation links
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/zonas",
    tag = ZONA_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved zonas", body = PagedDto<ZonaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_zonas(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = ZonaService::new(&state.db)
        .get_paginated(params.into_request())
        .await?;

    let links = LinkBuilder::new(origin, ZONAS_PATH);

    Ok((StatusCode::OK, Json(page.into_dto(&links, Zona::into_dto))))
}

/// Get a zona by id.
///
/// # Returns
/// - `200 OK` - The zona
/// - `404 Not Found` - No zona with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/zonas/{id}",
    tag = ZONA_TAG,
    params(
        ("id" = i64, Path, description = "Zona ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved zona", body = ZonaDto),
        (status = 404, description = "Zona not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_zona(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let zona = ZonaService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(zona.into_dto())))
}

/// Create a new zona.
///
/// The name is trimmed and the letter uppercased before saving. The letter must
/// be exactly one character.
///
/// # Returns
/// - `201 Created` - The created zona, with its URL in the `Location` header
/// - `400 Bad Request` - Blank name or invalid letter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/zonas",
    tag = ZONA_TAG,
    request_body = SaveZonaDto,
    responses(
        (status = 201, description = "Successfully created zona", body = ZonaDto),
        (status = 400, description = "Invalid zona data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_zona(
    State(state): State<AppState>,
    Json(payload): Json<SaveZonaDto>,
) -> Result<impl IntoResponse, AppError> {
    let zona = ZonaService::new(&state.db)
        .create(SaveZonaParam::from_dto(payload))
        .await?;

    let location = format!("{}/{}", ZONAS_PATH, zona.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(zona.into_dto()),
    ))
}

/// Update a zona.
///
/// # Returns
/// - `200 OK` - The updated zona
/// - `400 Bad Request` - Blank name or invalid letter
/// - `404 Not Found` - No zona with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/zonas/{id}",
    tag = ZONA_TAG,
    params(
        ("id" = i64, Path, description = "Zona ID")
    ),
    request_body = SaveZonaDto,
    responses(
        (status = 200, description = "Successfully updated zona", body = ZonaDto),
        (status = 400, description = "Invalid zona data", body = ErrorDto),
        (status = 404, description = "Zona not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_zona(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SaveZonaDto>,
) -> Result<impl IntoResponse, AppError> {
    let zona = ZonaService::new(&state.db)
        .update(id, SaveZonaParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(zona.into_dto())))
}

/// Delete a zona.
///
/// Refused while any moto is parked in the zona.
///
/// # Returns
/// - `204 No Content` - Zona deleted
/// - `400 Bad Request` - Motos still reference the zona
/// - `404 Not Found` - No zona with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/zonas/{id}",
    tag = ZONA_TAG,
    params(
        ("id" = i64, Path, description = "Zona ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted zona"),
        (status = 400, description = "Zona still has motos", body = ErrorDto),
        (status = 404, description = "Zona not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_zona(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ZonaService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

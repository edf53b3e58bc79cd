use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PagedDto},
        moto::{MotoDto, SaveMotoDto},
    },
    server::{
        controller::param::{MotoListParam, RequestOrigin},
        error::AppError,
        model::moto::{Moto, SaveMotoParam},
        service::moto::MotoService,
        state::AppState,
        util::pagination::LinkBuilder,
    },
};

/// Tag for grouping moto endpoints in OpenAPI documentation
pub static MOTO_TAG: &str = "moto";

pub static MOTOS_PATH: &str = "/api/motos";

/// Get paginated motos.
///
/// Each moto is returned with its zona, patio and status (including the status
/// grupo) expanded. The optional `placa` filter matches any part of the plate,
/// ignoring case, and is repeated in every navigation link.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `origin` - Scheme and host used to render absolute links
/// - `params` - Pagination parameters and optional placa filter
///
/// # Returns
/// - `200 OK` - Page of motos with navigation links
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/motos",
    tag = MOTO_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("placa" = Option<String>, Query, description = "Case-insensitive placa fragment")
    ),
    responses(
        (status = 200, description = "Successfully retrieved motos", body = PagedDto<MotoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_motos(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    Query(params): Query<MotoListParam>,
) -> Result<impl IntoResponse, AppError> {
    let (request, placa) = params.into_parts();

    let filter = placa.as_deref().filter(|placa| !placa.trim().is_empty());
    let links = LinkBuilder::new(origin, MOTOS_PATH).with_query("placa", filter);
    let page = MotoService::new(&state.db)
        .get_paginated(request, placa)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(&links, Moto::into_dto))))
}

/// Get a moto by id with its relations expanded.
///
/// # Returns
/// - `200 OK` - The moto
/// - `404 Not Found` - No moto with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/motos/{id}",
    tag = MOTO_TAG,
    params(
        ("id" = i64, Path, description = "Moto ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved moto", body = MotoDto),
        (status = 404, description = "Moto not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_moto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let moto = MotoService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(moto.into_dto())))
}

/// Create a new moto.
///
/// Placa and chassi are trimmed, uppercased and must be unique. The referenced
/// zona, patio and status must exist. `dataEntrada` defaults to now.
///
/// # Returns
/// - `201 Created` - The created moto with relations expanded
/// - `400 Bad Request` - Missing field, unknown reference or duplicate placa/chassi
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/motos",
    tag = MOTO_TAG,
    request_body = SaveMotoDto,
    responses(
        (status = 201, description = "Successfully created moto", body = MotoDto),
        (status = 400, description = "Invalid moto data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_moto(
    State(state): State<AppState>,
    Json(payload): Json<SaveMotoDto>,
) -> Result<impl IntoResponse, AppError> {
    let moto = MotoService::new(&state.db)
        .create(SaveMotoParam::from_dto(payload))
        .await?;

    let location = format!("{}/{}", MOTOS_PATH, moto.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(moto.into_dto()),
    ))
}

/// Update a moto.
///
/// Applies the same rules as creation; the moto's own placa and chassi do not
/// count as duplicates. Omitting `dataEntrada` keeps the stored value.
#[utoipa::path(
    put,
    path = "/api/motos/{id}",
    tag = MOTO_TAG,
    params(
        ("id" = i64, Path, description = "Moto ID")
    ),
    request_body = SaveMotoDto,
    responses(
        (status = 200, description = "Successfully updated moto", body = MotoDto),
        (status = 400, description = "Invalid moto data", body = ErrorDto),
        (status = 404, description = "Moto not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_moto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SaveMotoDto>,
) -> Result<impl IntoResponse, AppError> {
    let moto = MotoService::new(&state.db)
        .update(id, SaveMotoParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(moto.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/motos/{id}",
    tag = MOTO_TAG,
    params(
        ("id" = i64, Path, description = "Moto ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted moto"),
        (status = 404, description = "Moto not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_moto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    MotoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

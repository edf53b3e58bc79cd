use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health, moto, patio, status, status_grupo, usuario, zona},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yard Fleet API",
        description = "Tracking of motos across patios and zonas"
    ),
    tags(
        (name = "usuario", description = "User records"),
        (name = "zona", description = "Lettered zones of a yard"),
        (name = "patio", description = "Physical storage yards"),
        (name = "status_grupo", description = "Groups of statuses"),
        (name = "status", description = "Operational states of a moto"),
        (name = "moto", description = "Tracked motorcycles"),
        (name = "health", description = "Operational endpoints")
    )
)]
struct ApiDoc;

/// Builds every API route together with the OpenAPI document and Swagger UI.
///
/// The document is served at `/api-docs/openapi.json` and the UI at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(usuario::get_usuarios, usuario::create_usuario))
        .routes(routes!(
            usuario::get_usuario,
            usuario::update_usuario,
            usuario::delete_usuario
        ))
        .routes(routes!(zona::get_zonas, zona::create_zona))
        .routes(routes!(zona::get_zona, zona::update_zona, zona::delete_zona))
        .routes(routes!(patio::get_patios, patio::create_patio))
        .routes(routes!(
            patio::get_patio,
            patio::update_patio,
            patio::delete_patio
        ))
        .routes(routes!(
            status_grupo::get_status_grupos,
            status_grupo::create_status_grupo
        ))
        .routes(routes!(
            status_grupo::get_status_grupo,
            status_grupo::update_status_grupo,
            status_grupo::delete_status_grupo
        ))
        .routes(routes!(status::get_statuses, status::create_status))
        .routes(routes!(
            status::get_status,
            status::update_status,
            status::delete_status
        ))
        .routes(routes!(moto::get_motos, moto::create_moto))
        .routes(routes!(moto::get_moto, moto::update_moto, moto::delete_moto))
        .routes(routes!(health::health))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

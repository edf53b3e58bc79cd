use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZonaDto {
    pub id: i64,
    pub nome: String,
    pub letra: String,
}

/// Body of both create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveZonaDto {
    #[serde(default, alias = "Nome")]
    pub nome: String,
    #[serde(default, alias = "Letra")]
    pub letra: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::status_grupo::StatusGrupoDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    pub id: i64,
    pub nome: String,
    pub status_grupo_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_grupo: Option<StatusGrupoDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveStatusDto {
    #[serde(default, alias = "Nome")]
    pub nome: String,
    #[serde(default, alias = "StatusGrupoId")]
    pub status_grupo_id: i64,
}

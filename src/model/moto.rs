use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{patio::PatioDto, status::StatusDto, zona::ZonaDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotoDto {
    pub id: i64,
    pub placa: String,
    pub chassi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    pub data_entrada: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previsao_entrega: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fotos: Option<Vec<String>>,
    pub zona_id: i64,
    pub patio_id: i64,
    pub status_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zona: Option<ZonaDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patio: Option<PatioDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveMotoDto {
    #[serde(default, alias = "Placa")]
    pub placa: String,
    #[serde(default, alias = "Chassi")]
    pub chassi: String,
    #[serde(default, alias = "QrCode")]
    pub qr_code: Option<String>,
    /// Defaults to the time of the request when omitted.
    #[serde(default, alias = "DataEntrada")]
    pub data_entrada: Option<DateTime<Utc>>,
    #[serde(default, alias = "PrevisaoEntrega")]
    pub previsao_entrega: Option<DateTime<Utc>>,
    #[serde(default, alias = "Fotos")]
    pub fotos: Option<Vec<String>>,
    #[serde(default, alias = "ZonaId")]
    pub zona_id: i64,
    #[serde(default, alias = "PatioId")]
    pub patio_id: i64,
    #[serde(default, alias = "StatusId")]
    pub status_id: i64,
    #[serde(default, alias = "Observacoes")]
    pub observacoes: Option<String>,
}

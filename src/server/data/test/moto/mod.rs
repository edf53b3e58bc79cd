use crate::server::{
    data::moto::MotoRepository, model::moto::SaveMotoParam, util::pagination::PageRequest,
};
use chrono::{TimeZone, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;

fn param(placa: &str, zona_id: i64, patio_id: i64, status_id: i64) -> SaveMotoParam {
    SaveMotoParam {
        placa: placa.to_string(),
        chassi: format!("9C2{}", placa),
        qr_code: None,
        data_entrada: None,
        previsao_entrega: None,
        fotos: None,
        zona_id,
        patio_id,
        status_id,
        observacoes: None,
    }
}

use crate::server::{
    data::zona::ZonaRepository, model::zona::SaveZonaParam, util::pagination::PageRequest,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;

fn param(nome: &str, letra: &str) -> SaveZonaParam {
    SaveZonaParam {
        nome: nome.to_string(),
        letra: letra.to_string(),
    }
}

use crate::server::{data::usuario::UsuarioRepository, util::pagination::PageRequest};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

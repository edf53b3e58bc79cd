use crate::server::{
    data::status::StatusRepository, model::status::SaveStatusParam,
    util::pagination::PageRequest,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;

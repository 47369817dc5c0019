use crate::{
    model::pet::PetType,
    server::{data::pet::PetRepository, model::pet::CreatePetParams},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_all;
mod get_by_id;

use crate::{
    data::ufc_event::UfcEventRepository,
    error::AppError,
    model::ufc_event::{UpsertOutcome, UpsertUfcEventParam},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_between;
mod get_by_name;
mod upsert;

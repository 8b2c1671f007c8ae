use crate::{data::notify_channel::NotifyChannelRepository, error::AppError};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod get_all;
mod remove;

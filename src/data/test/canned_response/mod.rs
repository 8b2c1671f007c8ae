use crate::{data::canned_response::CannedResponseRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod random;

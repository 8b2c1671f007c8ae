//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary so services never handle entities directly.

pub mod notify_channel;
pub mod presence;
pub mod ufc_event;
pub mod wall_of_shame;

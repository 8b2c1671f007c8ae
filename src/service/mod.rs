//! Business logic between the Discord handlers, the scheduler and the repositories.

pub mod elevation;
pub mod presence;
pub mod ufc_event;
pub mod ufc_notification;
pub mod wall_of_shame;

pub use super::canned_response::Entity as CannedResponse;
pub use super::ufc_event::Entity as UfcEvent;
pub use super::ufc_notify_channel::Entity as UfcNotifyChannel;
pub use super::wall_of_shame::Entity as WallOfShame;

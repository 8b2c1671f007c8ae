mod canned_response;
mod notify_channel;
mod ufc_event;
mod wall_of_shame;

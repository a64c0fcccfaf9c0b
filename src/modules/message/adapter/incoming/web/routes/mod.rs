mod get_messages;
mod manage_messages;
mod submit_message;

pub use get_messages::{
    get_message_by_id_handler, get_messages_handler, unread_count_handler,
};
pub use manage_messages::{delete_message_handler, mark_message_read_handler};
pub use submit_message::{contact_handler, submit_message_handler};

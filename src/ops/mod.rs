pub mod contact_ops;
pub mod message_ops;

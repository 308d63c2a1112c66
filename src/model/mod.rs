pub mod ids;
pub mod contact;
pub mod sender;

// Re-exports for convenience
pub use ids::ContactId;
pub use contact::{Contact, Relationship};
pub use sender::Sender;

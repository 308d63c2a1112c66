pub mod contact_queries;
pub mod digest_queries;

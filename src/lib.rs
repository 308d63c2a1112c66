pub mod error;
pub mod validation;
pub mod model;
pub mod birthday;
pub mod message;
pub mod db;
pub mod ops;
pub mod queries;
pub mod delivery;
pub mod seed;
pub mod cli;

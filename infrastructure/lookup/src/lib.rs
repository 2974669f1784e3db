pub mod client;
pub mod wikipedia;

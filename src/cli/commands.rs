pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod types;

mod fields;
mod render;

pub mod cli;
pub mod client;
pub mod config;
pub mod draft;
pub mod error;
pub mod output;

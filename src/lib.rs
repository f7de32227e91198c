pub mod cli;
pub mod config;
pub mod customer;
pub mod engine;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod output;
pub mod routing;
pub mod server;
pub mod shop;
pub mod source;
pub mod state;
pub mod stats;
pub mod timeline;

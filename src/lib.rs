#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
pub mod app;
pub mod config;
pub mod database;
pub mod http;
pub mod logging;
pub mod query;
pub mod schema;
pub mod service;
pub mod store;
pub mod types;
pub mod util;

pub use app::App;

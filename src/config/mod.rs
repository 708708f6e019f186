use thiserror::Error;

mod database;
mod server;
mod service;

pub use database::Database;
pub use server::Server;
pub use service::Service;

#[derive(Debug, Error)]
pub enum LoadError {
  /// figment names the offending key and the variable
  /// it came from in its own message.
  #[error("could not parse configuration: {0}")]
  Parse(#[from] Box<figment::Error>),
  #[error("missing or empty required configuration values: {}", .0.join(", "))]
  Missing(Vec<&'static str>),
}

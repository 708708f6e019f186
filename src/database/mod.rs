mod error;
mod pool;

pub use error::{Error, ErrorExt, ErrorExt2, Result};
pub use pool::Pool;

pub type PoolConnection = sqlx::pool::PoolConnection<sqlx::Postgres>;
pub type Connection = sqlx::PgConnection;

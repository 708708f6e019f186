pub mod controllers;
pub mod error;

pub use controllers::configure;
pub use error::Error;

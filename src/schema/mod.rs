pub mod user;

pub use user::UserRow;

//! Statement construction for the `users` table.
pub mod page;
pub mod update;

pub use page::{Page, PageRequest};
pub use update::{Assignment, Column, UpdateStatement, Value};

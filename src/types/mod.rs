pub mod date;
pub mod form;
pub mod id;
pub mod patch;
pub mod timestamp;
pub mod user;

pub use date::Date;
pub use id::UserId;
pub use patch::Patch;
pub use timestamp::Timestamp;
pub use user::{NewUser, User, UserPatch};

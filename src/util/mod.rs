pub mod sensitive;
pub mod validation;

pub use sensitive::Sensitive;

pub mod builder;
pub mod comments;
pub mod engine;
pub mod patterns;
pub mod walker;

pub use crate::domain::model::{Action, Field, Manifest};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

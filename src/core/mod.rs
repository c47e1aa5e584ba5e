pub mod cache;
pub mod loader;

pub use crate::domain::model::{Record, TitleList};
pub use crate::domain::ports::{ConfigProvider, RecordSource};
pub use crate::utils::error::Result;

pub mod app;
pub mod calculator;
pub mod pipeline;

pub use crate::domain::model::{ProcessedItems, RunReport};
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::utils::error::Result;

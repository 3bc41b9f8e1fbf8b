pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{DefaultConfig, VERSION};
pub use crate::core::{app::Application, calculator};
pub use crate::utils::error::{AppError, Result};
pub use crate::utils::time::{FixedClock, SystemClock};

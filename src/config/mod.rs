#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::{ITEMS, MIN_ITEM_LENGTH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};

pub const VERSION: &str = "1.0.0";

/// Operands for the calculation step.
pub const OPERANDS: (i32, i32) = (5, 7);

/// Built-in settings; nothing here is read from the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl ConfigProvider for DefaultConfig {
    fn version(&self) -> &str {
        VERSION
    }

    fn items(&self) -> &[&'static str] {
        &ITEMS
    }

    fn min_item_length(&self) -> usize {
        MIN_ITEM_LENGTH
    }

    fn operands(&self) -> (i32, i32) {
        OPERANDS
    }
}

/// Checks any settings source: a version, at least one item, and at least
/// one item that survives the length filter.
pub fn validate_settings(config: &impl ConfigProvider) -> Result<()> {
    validate_non_empty_string("version", config.version())?;
    validate_non_empty_list("items", config.items())?;

    let min_length = config.min_item_length();
    if !config.items().iter().any(|item| item.chars().count() > min_length) {
        return Err(AppError::ConfigError {
            message: format!("no item is longer than {} chars", min_length),
        });
    }
    Ok(())
}

impl Validate for DefaultConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

use crate::error::{ConfigError, Result};
use crate::settings::AppConfig;

impl AppConfig {
    /// Reject values the display layer cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a blank currency symbol or a
    /// thousands separator that is not exactly one character.
    pub fn validate(&self) -> Result<()> {
        if self.display.currency_symbol.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "display.currency_symbol must not be empty".to_string(),
            ));
        }

        if self.display.thousands_separator.chars().count() != 1 {
            return Err(ConfigError::ValidationError(format!(
                "display.thousands_separator must be a single character, got {:?}",
                self.display.thousands_separator
            )));
        }

        Ok(())
    }
}

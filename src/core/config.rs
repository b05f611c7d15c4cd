//! Rules configuration.
//!
//! The board geometry is fixed, but the two thresholds that drive overflow
//! and victory are carried in `RulesConfig` so that variants and tests can
//! tune them without touching rule code.

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Tunable rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Tallest a stack may be once a move has resolved (default: 5).
    /// Pieces beyond this are pushed off the bottom.
    pub max_stack_height: usize,

    /// Captures needed to win (default: 6).
    pub captures_to_win: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_stack_height: 5,
            captures_to_win: 6,
        }
    }
}

impl RulesConfig {
    /// Set the maximum stack height.
    #[must_use]
    pub fn with_max_stack_height(mut self, height: usize) -> Self {
        self.max_stack_height = height;
        self
    }

    /// Set the capture count that ends the game.
    #[must_use]
    pub fn with_captures_to_win(mut self, captures: u32) -> Self {
        self.captures_to_win = captures;
        self
    }

    /// Reject configurations under which the game cannot be played.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.max_stack_height == 0 {
            return Err(SetupError::InvalidConfig("max_stack_height must be at least 1"));
        }
        if self.captures_to_win == 0 {
            return Err(SetupError::InvalidConfig("captures_to_win must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.max_stack_height, 5);
        assert_eq!(config.captures_to_win, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RulesConfig::default()
            .with_max_stack_height(3)
            .with_captures_to_win(2);

        assert_eq!(config.max_stack_height, 3);
        assert_eq!(config.captures_to_win, 2);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            RulesConfig::default().with_max_stack_height(0).validate(),
            Err(SetupError::InvalidConfig(_))
        ));
        assert!(matches!(
            RulesConfig::default().with_captures_to_win(0).validate(),
            Err(SetupError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let json = r#"{"max_stack_height":4,"captures_to_win":3}"#;
        let config: RulesConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, RulesConfig::default().with_max_stack_height(4).with_captures_to_win(3));
    }
}

//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Negamax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched from the root, counting the root move itself.
    /// Small values (3-5) keep a decision well under a second on 5x5.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(SearchConfig::default().depth, 4);
    }

    #[test]
    fn test_builder_and_serde() {
        let config = SearchConfig::default().with_depth(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.depth, 5);
    }
}

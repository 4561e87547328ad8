/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Ticks per second for a length-0 snake; every segment adds one more
    pub base_speed: u32,
    /// Seed for apple placement and reset directions, random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_speed: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom base speed
    pub fn new(base_speed: u32) -> Self {
        Self {
            base_speed,
            ..Default::default()
        }
    }

    /// Same configuration with a fixed RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.base_speed, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(4).with_seed(99);
        assert_eq!(config.base_speed, 4);
        assert_eq!(config.seed, Some(99));
    }
}

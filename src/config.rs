use crate::error::Result;
use crate::physics::math::Scalar;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhysicsConfig {
    /// Time step per integrator call, in years.
    pub dt: Scalar,
    /// Step count used when the command line supplies none.
    pub steps: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            steps: 1000,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file
    /// doesn't exist or fails to parse.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse config file {path}: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!("config file {path} not found; using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a file, surfacing any failure.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_run() {
        let config = SimulationConfig::default();
        assert_eq!(config.physics.dt, 0.01);
        assert_eq!(config.physics.steps, 1000);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = SimulationConfig::load_or_default("/nonexistent/orrery.toml");
        assert_eq!(config.physics.steps, 1000);
    }

    #[test]
    fn save_and_load_round_trip() -> crate::error::Result<()> {
        let path = std::env::temp_dir().join("orrery_config_round_trip.toml");
        let path = path.to_string_lossy();

        let mut config = SimulationConfig::default();
        config.physics.dt = 0.005;
        config.physics.steps = 250;
        config.save(&path)?;

        let loaded = SimulationConfig::load(&path)?;
        assert_eq!(loaded.physics.dt, 0.005);
        assert_eq!(loaded.physics.steps, 250);

        std::fs::remove_file(path.as_ref())?;
        Ok(())
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("orrery_config_malformed.toml");
        std::fs::write(&path, "physics = \"not a table\"").unwrap();

        let config = SimulationConfig::load_or_default(&path.to_string_lossy());
        assert_eq!(config.physics.steps, 1000);

        std::fs::remove_file(path).unwrap();
    }
}

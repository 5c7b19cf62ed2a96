use brachium_core::joint::AngleConstraint;
use brachium_core::profile::ArmProfile;
use brachium_core::{consts, Error};

#[derive(Clone, Debug, serde_derive::Deserialize, PartialEq)]
pub struct ArmConfig {
    /// Shoulder and elbow segment length in millimeters.
    #[serde(default = "ArmConfig::default_segment_length")]
    pub segment_length: f32,
    /// End effector length in millimeters.
    #[serde(default = "ArmConfig::default_effector_length")]
    pub effector_length: f32,
}

impl ArmConfig {
    fn default_segment_length() -> f32 {
        consts::SEGMENT_LENGTH
    }

    fn default_effector_length() -> f32 {
        consts::EFFECTOR_LENGTH
    }
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            segment_length: Self::default_segment_length(),
            effector_length: Self::default_effector_length(),
        }
    }
}

#[derive(Clone, Debug, serde_derive::Deserialize, PartialEq)]
pub struct LimitConfig {
    /// Lower joint angle limit in degrees.
    #[serde(default = "LimitConfig::default_min")]
    pub min: f32,
    /// Upper joint angle limit in degrees.
    #[serde(default = "LimitConfig::default_max")]
    pub max: f32,
}

impl LimitConfig {
    fn default_min() -> f32 {
        consts::ANGLE_MIN
    }

    fn default_max() -> f32 {
        consts::ANGLE_MAX
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            min: Self::default_min(),
            max: Self::default_max(),
        }
    }
}

#[derive(Clone, Debug, Default, serde_derive::Deserialize, PartialEq)]
pub struct Config {
    /// Arm geometry.
    #[serde(default)]
    pub arm: ArmConfig,
    /// Joint angle limits.
    #[serde(default)]
    pub limits: LimitConfig,
}

impl Config {
    /// Read the configuration from a TOML file.
    pub fn try_from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        Ok(toml::from_str(&contents)?)
    }

    /// Build a validated arm profile from the configuration.
    pub fn profile(&self) -> Result<ArmProfile, Error> {
        let constraint = AngleConstraint::new(self.limits.min, self.limits.max)?;

        ArmProfile::new(
            self.arm.segment_length,
            self.arm.effector_length,
            constraint,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.profile().unwrap(), ArmProfile::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [arm]
            effector_length = 200.0
            "#,
        )
        .unwrap();

        assert_eq!(config.arm.segment_length, consts::SEGMENT_LENGTH);
        assert_eq!(config.arm.effector_length, 200.0);
        assert_eq!(config.limits, LimitConfig::default());
    }

    #[test]
    fn test_invalid_limits_rejected_at_profile() {
        let config: Config = toml::from_str(
            r#"
            [limits]
            min = 125.0
            max = -125.0
            "#,
        )
        .unwrap();

        assert!(config.profile().is_err());
    }
}

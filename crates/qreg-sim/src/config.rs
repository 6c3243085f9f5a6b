//! Simulator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Hard ceiling on `max_qubits`. A 14-qubit operator already takes 4 GB.
pub const MAX_SUPPORTED_QUBITS: usize = 14;

/// Limits and defaults for a register.
///
/// Dense operators cost `O(4^n)` memory per gate, so `max_qubits` guards
/// against allocating more than the host can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Largest register that may be constructed.
    pub max_qubits: usize,
    /// Largest shot count accepted by the sampler.
    pub max_shots: usize,
    /// Shots used by [`Register::get_counts`](crate::Register::get_counts).
    pub default_shots: usize,
    /// Tolerance for normalization checks.
    pub tolerance: f64,
}

impl SimConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum register size, capped at [`MAX_SUPPORTED_QUBITS`].
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits.min(MAX_SUPPORTED_QUBITS);
        self
    }

    /// Set the maximum shot count.
    #[must_use]
    pub fn with_max_shots(mut self, max_shots: usize) -> Self {
        self.max_shots = max_shots;
        self
    }

    /// Set the default shot count.
    #[must_use]
    pub fn with_default_shots(mut self, default_shots: usize) -> Self {
        self.default_shots = default_shots;
        self
    }

    /// Set the normalization tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The register limit actually enforced.
    pub fn effective_max_qubits(&self) -> usize {
        self.max_qubits.min(MAX_SUPPORTED_QUBITS)
    }

    /// Check that the limits are usable.
    pub fn validate(&self) -> SimResult<()> {
        if self.max_qubits == 0 || self.max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(SimError::Config(format!(
                "max_qubits must be between 1 and {MAX_SUPPORTED_QUBITS}, got {}",
                self.max_qubits
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(SimError::Config(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> SimResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from YAML. Missing fields take their defaults.
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(s).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_qubits: 12,
            max_shots: 1_000_000,
            default_shots: 100,
            tolerance: 1e-10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.max_qubits, 12);
        assert_eq!(config.default_shots, 100);
    }

    #[test]
    fn test_partial_yaml() {
        let config = SimConfig::from_yaml_str("max_qubits: 4\n").unwrap();
        assert_eq!(config.max_qubits, 4);
        assert_eq!(config.max_shots, 1_000_000);
    }

    #[test]
    fn test_json_builder_agree() {
        let parsed = SimConfig::from_json_str(r#"{"default_shots": 10, "tolerance": 1e-6}"#).unwrap();
        let built = SimConfig::new().with_default_shots(10).with_tolerance(1e-6);
        assert_eq!(parsed, built);
    }

    #[test]
    fn test_max_qubits_is_capped() {
        let config = SimConfig::new().with_max_qubits(128);
        assert_eq!(config.max_qubits, MAX_SUPPORTED_QUBITS);

        let direct = SimConfig {
            max_qubits: 64,
            ..SimConfig::default()
        };
        assert_eq!(direct.effective_max_qubits(), MAX_SUPPORTED_QUBITS);
        assert!(direct.validate().is_err());
    }

    #[test]
    fn test_parsed_limits_are_validated() {
        assert!(matches!(
            SimConfig::from_yaml_str("max_qubits: 64"),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            SimConfig::from_json_str(r#"{"max_qubits": 0}"#),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            SimConfig::from_json_str(r#"{"tolerance": -1.0}"#),
            Err(SimError::Config(_))
        ));
        assert!(SimConfig::from_yaml_str("max_qubits: 14").is_ok());
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            SimConfig::from_json_str(r#"{"max_qubits": "many"}"#),
            Err(SimError::Config(_))
        ));
    }
}

use crate::error::SeverityError;
use crate::types::variant::{RiskLevel, Variant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityConfig {
    pub calculator: CalculatorConfig,
    pub output: OutputConfig,
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub variant: Variant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailOn {
    #[default]
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl FailOn {
    pub fn threshold(self) -> Option<RiskLevel> {
        match self {
            Self::None => None,
            Self::Low => Some(RiskLevel::Low),
            Self::Medium => Some(RiskLevel::Medium),
            Self::High => Some(RiskLevel::High),
            Self::VeryHigh => Some(RiskLevel::VeryHigh),
        }
    }

    pub fn is_met_by(self, level: RiskLevel) -> bool {
        self.threshold().is_some_and(|threshold| level >= threshold)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub fail_on: FailOn,
}

pub const OUTPUT_FORMATS: [&str; 4] = ["text", "md", "json", "html"];

impl SeverityConfig {
    pub fn validate(&self) -> Result<(), SeverityError> {
        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(SeverityError::ConfigParse(format!(
                "unsupported output.format: {} (expected one of {})",
                self.output.format,
                OUTPUT_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: SeverityConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.calculator.variant, Variant::Explicit);
        assert_eq!(cfg.output.format, "text");
        assert!(cfg.output.color);
        assert_eq!(cfg.policy.fail_on, FailOn::None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[calculator]
variant = "reactive"

[output]
format = "json"
color = false

[policy]
fail_on = "very-high"
"#;
        let cfg: SeverityConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.calculator.variant, Variant::Reactive);
        assert_eq!(cfg.output.format, "json");
        assert!(!cfg.output.color);
        assert_eq!(cfg.policy.fail_on, FailOn::VeryHigh);
    }

    #[test]
    fn unknown_variant_fails_to_parse() {
        let toml_str = r#"
[calculator]
variant = "merged"
"#;
        assert!(toml::from_str::<SeverityConfig>(toml_str).is_err());
    }

    #[test]
    fn validate_rejects_unknown_format() {
        let toml_str = r#"
[output]
format = "sarif"
"#;
        let cfg: SeverityConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported output.format"));
    }

    #[test]
    fn fail_on_compares_against_band_order() {
        assert!(!FailOn::None.is_met_by(RiskLevel::VeryHigh));
        assert!(FailOn::High.is_met_by(RiskLevel::High));
        assert!(FailOn::High.is_met_by(RiskLevel::VeryHigh));
        assert!(!FailOn::High.is_met_by(RiskLevel::Medium));
        assert!(FailOn::Low.is_met_by(RiskLevel::Low));
    }
}

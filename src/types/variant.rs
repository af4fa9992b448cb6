use crate::types::criteria::EaseOfIdentification;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which calculator deployment is in use. The two differ in threshold table,
/// EI default, comment support and content, and are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Computes on an explicit "Calculate Severity" action.
    #[default]
    Explicit,
    /// Recomputes after every field change and carries per-criterion comments.
    Reactive,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Reactive => "reactive",
        }
    }

    pub fn profile(self) -> VariantProfile {
        match self {
            Self::Explicit => VariantProfile {
                variant: self,
                bands: RiskBands::EXPLICIT,
                default_ei: None,
                comments_enabled: false,
                recompute_on_change: false,
            },
            Self::Reactive => VariantProfile {
                variant: self,
                bands: RiskBands::REACTIVE,
                default_ei: Some(EaseOfIdentification::Maximum),
                comments_enabled: true,
                recompute_on_change: true,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantProfile {
    pub variant: Variant,
    pub bands: RiskBands,
    pub default_ei: Option<EaseOfIdentification>,
    pub comments_enabled: bool,
    pub recompute_on_change: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Verdict colour used by every renderer.
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#28a745",
            Self::Medium => "#ffc107",
            Self::High => "#dc3545",
            Self::VeryHigh => "#c82333",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Low => (0x28, 0xa7, 0x45),
            Self::Medium => (0xff, 0xc1, 0x07),
            Self::High => (0xdc, 0x35, 0x45),
            Self::VeryHigh => (0xc8, 0x23, 0x33),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds (inclusive) of the Medium, High and Very High bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBands {
    pub medium_from: f64,
    pub high_from: f64,
    pub very_high_from: f64,
}

impl RiskBands {
    pub const EXPLICIT: RiskBands = RiskBands {
        medium_from: 2.0,
        high_from: 3.0,
        very_high_from: 4.0,
    };

    pub const REACTIVE: RiskBands = RiskBands {
        medium_from: 3.0,
        high_from: 5.0,
        very_high_from: 7.0,
    };

    pub fn classify(&self, severity: f64) -> RiskLevel {
        if severity < self.medium_from {
            RiskLevel::Low
        } else if severity < self.high_from {
            RiskLevel::Medium
        } else if severity < self.very_high_from {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }
}

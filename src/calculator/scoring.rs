use crate::types::variant::{RiskBands, RiskLevel};

/// Sum of the four breach-impact sub-scores (CB).
pub fn impact_sum(confidentiality: f64, integrity: f64, availability: f64, malicious: f64) -> f64 {
    confidentiality + integrity + availability + malicious
}

/// SE = DPC x EI + CB. All inputs are multiples of 0.25, so the result is exact.
pub fn severity(dpc: f64, ei: f64, cb: f64) -> f64 {
    dpc * ei + cb
}

pub fn risk_level(severity: f64, bands: &RiskBands) -> RiskLevel {
    bands.classify(severity)
}

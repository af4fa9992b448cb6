use crate::types::criteria::Criterion;
use crate::types::variant::{RiskLevel, Variant};
use serde::Serialize;

/// One row of the breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub criterion: Criterion,
    pub title: &'static str,
    pub option: &'static str,
    pub score: f64,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Derived result of one computation. Never stored beyond the calculator's
/// current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityResult {
    pub variant: Variant,
    pub severity: f64,
    pub risk_level: RiskLevel,
    pub dpc_value: &'static str,
    pub ei_value: &'static str,
    pub cb: f64,
    pub breakdown: Vec<BreakdownRow>,
}

impl SeverityResult {
    pub fn severity_display(&self) -> String {
        format!("{:.2}", self.severity)
    }

    pub fn cb_display(&self) -> String {
        format!("{:.2}", self.cb)
    }

    pub fn formula(&self) -> String {
        format!(
            "Formula: SE = (DPC: {}) x (EI: {}) + (CB: {})",
            self.dpc_value,
            self.ei_value,
            self.cb_display()
        )
    }

    #[cfg(test)]
    pub fn row(&self, criterion: Criterion) -> Option<&BreakdownRow> {
        self.breakdown.iter().find(|row| row.criterion == criterion)
    }
}

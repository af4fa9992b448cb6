use crate::calculator::Calculator;
use crate::content::ENISA_REPORT_URL;
use crate::types::criteria::Criterion;
use crate::types::report::BreakdownRow;
use crate::types::variant::{RiskLevel, Variant};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub generated_at: String,
    pub variant: Variant,
    pub selections: BTreeMap<Criterion, Option<&'static str>>,
    pub result: Option<JsonResult<'a>>,
    pub methodology: &'static str,
}

#[derive(Debug, Serialize)]
pub struct JsonResult<'a> {
    pub severity: String,
    pub risk_level: RiskLevel,
    pub color: &'static str,
    pub formula: String,
    pub cb: String,
    pub breakdown: &'a [BreakdownRow],
}

impl<'a> JsonReport<'a> {
    pub fn new(calculator: &'a Calculator) -> Self {
        let selections = Criterion::ALL
            .into_iter()
            .map(|criterion| (criterion, calculator.assessment().selected(criterion)))
            .collect();
        let result = calculator.result().map(|result| JsonResult {
            severity: result.severity_display(),
            risk_level: result.risk_level,
            color: result.risk_level.color(),
            formula: result.formula(),
            cb: result.cb_display(),
            breakdown: &result.breakdown,
        });

        Self {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now().to_rfc3339(),
            variant: calculator.variant(),
            selections,
            result,
            methodology: ENISA_REPORT_URL,
        }
    }
}

pub fn to_json(calculator: &Calculator) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::new(calculator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn json_report_contains_two_decimal_severity() {
        let mut calculator = Calculator::new(Variant::Reactive);
        calculator.set(Criterion::Dpc, "3").expect("valid dpc");
        calculator.set(Criterion::Ei, "0.75").expect("valid ei");
        for criterion in [
            Criterion::Confidentiality,
            Criterion::Integrity,
            Criterion::Availability,
        ] {
            calculator.set(criterion, "0.25").expect("valid loss");
        }
        calculator.set(Criterion::Malicious, "0.5").expect("valid malicious");

        let rendered = to_json(&calculator).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["variant"], "reactive");
        assert_eq!(value["result"]["severity"], "3.50");
        assert_eq!(value["result"]["risk_level"], "Medium");
        assert_eq!(value["result"]["color"], "#ffc107");
        assert_eq!(value["result"]["cb"], "1.25");
        assert_eq!(value["result"]["breakdown"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["result"]["breakdown"][0]["criterion"], "dpc");
        assert_eq!(value["result"]["breakdown"][0]["comment"], "");
        assert_eq!(value["selections"]["ei"], "0.75");
    }

    #[test]
    fn json_report_has_null_result_before_compute() {
        let calculator = Calculator::new(Variant::Explicit);
        let rendered = to_json(&calculator).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("valid json");
        assert!(value["result"].is_null());
        assert!(value["selections"]["ei"].is_null());
        assert_eq!(value["methodology"], ENISA_REPORT_URL);
    }

    #[test]
    fn very_high_serializes_with_space() {
        let mut calculator = Calculator::new(Variant::Explicit);
        calculator.set(Criterion::Dpc, "4").expect("valid dpc");
        calculator.set(Criterion::Ei, "1").expect("valid ei");
        calculator.compute().expect("compute");
        let rendered = to_json(&calculator).expect("json should serialize");
        assert!(rendered.contains("\"risk_level\": \"Very High\""));
        assert!(!rendered.contains("\"comment\""));
    }
}

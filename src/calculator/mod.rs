pub mod scoring;

use crate::content::ContentTable;
use crate::error::{Result, SeverityError};
use crate::types::criteria::{
    parse_option, Criterion, DataProcessingContext, EaseOfIdentification, LossLevel,
    MaliciousIntent, ScoredOption,
};
use crate::types::report::{BreakdownRow, SeverityResult};
use crate::types::variant::{Variant, VariantProfile};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// The six current selections plus optional per-criterion comments.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub dpc: DataProcessingContext,
    pub ei: Option<EaseOfIdentification>,
    pub confidentiality: LossLevel,
    pub integrity: LossLevel,
    pub availability: LossLevel,
    pub malicious: MaliciousIntent,
    /// Indexed by `Criterion::index`.
    pub comments: [String; 6],
}

impl Assessment {
    pub fn with_defaults(profile: &VariantProfile) -> Self {
        Self {
            dpc: DataProcessingContext::Simple,
            ei: profile.default_ei,
            confidentiality: LossLevel::None,
            integrity: LossLevel::None,
            availability: LossLevel::None,
            malicious: MaliciousIntent::No,
            comments: Default::default(),
        }
    }

    /// Canonical option string of the current selection, `None` while unset.
    pub fn selected(&self, criterion: Criterion) -> Option<&'static str> {
        match criterion {
            Criterion::Dpc => Some(self.dpc.as_str()),
            Criterion::Ei => self.ei.map(ScoredOption::as_str),
            Criterion::Confidentiality => Some(self.confidentiality.as_str()),
            Criterion::Integrity => Some(self.integrity.as_str()),
            Criterion::Availability => Some(self.availability.as_str()),
            Criterion::Malicious => Some(self.malicious.as_str()),
        }
    }

    pub fn score(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::Dpc => Some(self.dpc.score()),
            Criterion::Ei => self.ei.map(ScoredOption::score),
            Criterion::Confidentiality => Some(self.confidentiality.score()),
            Criterion::Integrity => Some(self.integrity.score()),
            Criterion::Availability => Some(self.availability.score()),
            Criterion::Malicious => Some(self.malicious.score()),
        }
    }

    pub fn comment(&self, criterion: Criterion) -> &str {
        &self.comments[criterion.index()]
    }

    /// Parses `raw` for `criterion` and stores it. The assessment is left
    /// untouched when the value is outside the criterion's options.
    pub fn set(&mut self, criterion: Criterion, raw: &str) -> Result<()> {
        match criterion {
            Criterion::Dpc => self.dpc = parse_option(criterion, raw)?,
            Criterion::Ei => self.ei = Some(parse_option(criterion, raw)?),
            Criterion::Confidentiality => self.confidentiality = parse_option(criterion, raw)?,
            Criterion::Integrity => self.integrity = parse_option(criterion, raw)?,
            Criterion::Availability => self.availability = parse_option(criterion, raw)?,
            Criterion::Malicious => self.malicious = parse_option(criterion, raw)?,
        }
        Ok(())
    }
}

/// Derives the result for `assessment`. Fails only when EI is unset.
pub fn evaluate(
    assessment: &Assessment,
    profile: &VariantProfile,
    content: &ContentTable,
) -> Result<SeverityResult> {
    let ei = assessment
        .ei
        .ok_or(SeverityError::MissingEaseOfIdentification)?;

    let cb = scoring::impact_sum(
        assessment.confidentiality.score(),
        assessment.integrity.score(),
        assessment.availability.score(),
        assessment.malicious.score(),
    );
    let severity = scoring::severity(assessment.dpc.score(), ei.score(), cb);
    let risk_level = scoring::risk_level(severity, &profile.bands);

    let breakdown = Criterion::ALL
        .iter()
        .filter_map(|criterion| {
            let option = assessment.selected(*criterion)?;
            Some(BreakdownRow {
                criterion: *criterion,
                title: criterion.title(),
                option,
                score: assessment.score(*criterion)?,
                description: content.description(*criterion, option).unwrap_or_default(),
                comment: profile
                    .comments_enabled
                    .then(|| assessment.comment(*criterion).to_string()),
            })
        })
        .collect();

    Ok(SeverityResult {
        variant: profile.variant,
        severity,
        risk_level,
        dpc_value: assessment.dpc.as_str(),
        ei_value: ei.as_str(),
        cb,
        breakdown,
    })
}

/// Form state for one session: selections, open Know More panels and the
/// last computed result.
#[derive(Debug, Clone)]
pub struct Calculator {
    profile: VariantProfile,
    content: &'static ContentTable,
    assessment: Assessment,
    open_examples: BTreeSet<Criterion>,
    result: Option<SeverityResult>,
}

impl Calculator {
    pub fn new(variant: Variant) -> Self {
        let profile = variant.profile();
        let mut calculator = Self {
            assessment: Assessment::with_defaults(&profile),
            content: ContentTable::for_variant(variant),
            profile,
            open_examples: BTreeSet::new(),
            result: None,
        };
        if profile.recompute_on_change {
            calculator.recompute();
        }
        calculator
    }

    pub fn variant(&self) -> Variant {
        self.profile.variant
    }

    pub fn profile(&self) -> &VariantProfile {
        &self.profile
    }

    pub fn content(&self) -> &'static ContentTable {
        self.content
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn result(&self) -> Option<&SeverityResult> {
        self.result.as_ref()
    }

    pub fn is_examples_open(&self, criterion: Criterion) -> bool {
        self.open_examples.contains(&criterion)
    }

    /// Description of the current selection, empty while unset.
    pub fn selected_description(&self, criterion: Criterion) -> &'static str {
        self.assessment
            .selected(criterion)
            .and_then(|value| self.content.description(criterion, value))
            .unwrap_or_default()
    }

    pub fn set(&mut self, criterion: Criterion, raw: &str) -> Result<()> {
        if let Err(err) = self.assessment.set(criterion, raw) {
            warn!(%criterion, value = raw, "rejected selection");
            return Err(err);
        }
        debug!(%criterion, value = raw, "selection changed");
        self.after_change();
        Ok(())
    }

    /// Returns a criterion to the unselected placeholder. Only a criterion
    /// without a default, EI in the explicit calculator, can be cleared.
    pub fn clear(&mut self, criterion: Criterion) -> Result<()> {
        if criterion != Criterion::Ei || self.profile.default_ei.is_some() {
            warn!(%criterion, "clear rejected by variant");
            return Err(SeverityError::NotClearable(
                criterion.title().to_string(),
                self.variant().to_string(),
            ));
        }
        self.assessment.ei = None;
        debug!(%criterion, "selection cleared");
        self.after_change();
        Ok(())
    }

    pub fn set_comment(&mut self, criterion: Criterion, text: &str) -> Result<()> {
        if !self.profile.comments_enabled {
            warn!(%criterion, "comment rejected by variant");
            return Err(SeverityError::CommentsUnsupported(
                self.variant().to_string(),
            ));
        }
        self.assessment.comments[criterion.index()] = text.to_string();
        debug!(%criterion, "comment changed");
        self.after_change();
        Ok(())
    }

    /// Runs the "Calculate Severity" action. On failure the previous result is kept.
    pub fn compute(&mut self) -> Result<&SeverityResult> {
        let result = evaluate(&self.assessment, &self.profile, self.content).inspect_err(|_| {
            warn!("compute requested without an ease of identification level");
        })?;
        info!(
            severity = result.severity,
            risk_level = %result.risk_level,
            "severity computed"
        );
        Ok(self.result.insert(result))
    }

    /// Flips the Know More panel for `criterion` and reports whether it is now open.
    pub fn toggle_examples(&mut self, criterion: Criterion) -> Result<bool> {
        if self.content.examples(criterion).is_none() {
            return Err(SeverityError::NoExamples(criterion.title().to_string()));
        }
        if self.open_examples.remove(&criterion) {
            Ok(false)
        } else {
            self.open_examples.insert(criterion);
            Ok(true)
        }
    }

    fn after_change(&mut self) {
        if self.profile.recompute_on_change {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        match evaluate(&self.assessment, &self.profile, self.content) {
            Ok(result) => {
                debug!(severity = result.severity, "result recomputed");
                self.result = Some(result);
            }
            Err(err) => debug!(error = %err, "result not recomputed"),
        }
    }
}

//! Fixed copy shown by the calculator: option labels, descriptions, Know More
//! panels and attribution. Each variant ships its own table.

pub mod explicit;
pub mod reactive;

use crate::types::criteria::Criterion;
use crate::types::variant::Variant;

pub const TITLE: &str = "Data Breach Severity Calculator";

pub const INTRO: &str = "This framework provides a quantitative tool to assess the severity of a data breach. It combines various factors to generate a risk score that reflects the potential impact on individuals.";

pub const ATTRIBUTION: &str =
    "The methodology is derived from ENISA. For more details about the original methodology, please access the ENISA report here.";

pub const ENISA_REPORT_URL: &str = "https://www.enisa.europa.eu/publications/dbn-severity";

#[derive(Debug, Clone, Copy)]
pub struct OptionContent {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CriterionContent {
    pub summary: &'static str,
    pub select_prompt: Option<&'static str>,
    pub comment_prompt: Option<&'static str>,
    pub options: &'static [OptionContent],
    pub examples: Option<&'static str>,
}

#[derive(Debug)]
pub struct ContentTable {
    /// Indexed by `Criterion::index`.
    pub criteria: [CriterionContent; 6],
    /// Shown for a selection that has not been made yet.
    pub unset_label: &'static str,
}

impl ContentTable {
    pub fn for_variant(variant: Variant) -> &'static ContentTable {
        match variant {
            Variant::Explicit => &explicit::TABLE,
            Variant::Reactive => &reactive::TABLE,
        }
    }

    pub fn criterion(&self, criterion: Criterion) -> &CriterionContent {
        &self.criteria[criterion.index()]
    }

    pub fn option(&self, criterion: Criterion, value: &str) -> Option<&OptionContent> {
        self.criterion(criterion)
            .options
            .iter()
            .find(|option| option.value == value)
    }

    pub fn description(&self, criterion: Criterion, value: &str) -> Option<&'static str> {
        self.option(criterion, value).map(|option| option.description)
    }

    pub fn label(&self, criterion: Criterion, value: &str) -> Option<&'static str> {
        self.option(criterion, value).map(|option| option.label)
    }

    pub fn examples(&self, criterion: Criterion) -> Option<&'static str> {
        self.criterion(criterion).examples
    }
}

use crate::error::{Result, SeverityError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six inputs of the severity formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Dpc,
    Ei,
    Confidentiality,
    Integrity,
    Availability,
    Malicious,
}

impl Criterion {
    /// Form order, which is also the breakdown table order.
    pub const ALL: [Criterion; 6] = [
        Criterion::Dpc,
        Criterion::Ei,
        Criterion::Confidentiality,
        Criterion::Integrity,
        Criterion::Availability,
        Criterion::Malicious,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Dpc => "dpc",
            Self::Ei => "ei",
            Self::Confidentiality => "confidentiality",
            Self::Integrity => "integrity",
            Self::Availability => "availability",
            Self::Malicious => "malicious",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dpc => "Data Processing Context (DPC)",
            Self::Ei => "Ease of Identification (EI)",
            Self::Confidentiality => "Loss of Confidentiality",
            Self::Integrity => "Loss of Integrity",
            Self::Availability => "Loss of Availability",
            Self::Malicious => "Malicious Intent",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Dpc => 0,
            Self::Ei => 1,
            Self::Confidentiality => 2,
            Self::Integrity => 3,
            Self::Availability => 4,
            Self::Malicious => 5,
        }
    }

    /// Canonical option strings, in the order the form presents them.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Dpc => &["1", "2", "3", "4"],
            Self::Ei => &["0.25", "0.5", "0.75", "1"],
            Self::Confidentiality | Self::Integrity | Self::Availability => &["0", "0.25", "0.5"],
            Self::Malicious => &["0", "0.5"],
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Criterion {
    type Err = SeverityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dpc" | "data-processing-context" => Ok(Self::Dpc),
            "ei" | "ease-of-identification" => Ok(Self::Ei),
            "confidentiality" | "c" => Ok(Self::Confidentiality),
            "integrity" | "i" => Ok(Self::Integrity),
            "availability" | "a" => Ok(Self::Availability),
            "malicious" | "malicious-intent" | "m" => Ok(Self::Malicious),
            _ => Err(SeverityError::UnknownCriterion(s.trim().to_string())),
        }
    }
}

/// A closed set of selectable options for one criterion.
pub trait ScoredOption: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn score(self) -> f64;

    fn as_str(self) -> &'static str;
}

/// Parses a raw selection, accepting the canonical spelling or any numerically
/// equal one ("1.0", ".5"). Everything else is rejected.
pub fn parse_option<T: ScoredOption>(criterion: Criterion, raw: &str) -> Result<T> {
    let trimmed = raw.trim();
    if let Some(option) = T::ALL.iter().find(|option| option.as_str() == trimmed) {
        return Ok(*option);
    }

    let numeric = trimmed.parse::<f64>().ok().filter(|value| value.is_finite());
    numeric
        .and_then(|value| T::ALL.iter().find(|option| option.score() == value))
        .copied()
        .ok_or_else(|| SeverityError::InvalidOption {
            criterion: criterion.title().to_string(),
            value: trimmed.to_string(),
            allowed: criterion.options().join(", "),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataProcessingContext {
    Simple,
    Behavioral,
    Financial,
    Sensitive,
}

impl ScoredOption for DataProcessingContext {
    const ALL: &'static [Self] = &[
        Self::Simple,
        Self::Behavioral,
        Self::Financial,
        Self::Sensitive,
    ];

    fn score(self) -> f64 {
        match self {
            Self::Simple => 1.0,
            Self::Behavioral => 2.0,
            Self::Financial => 3.0,
            Self::Sensitive => 4.0,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "1",
            Self::Behavioral => "2",
            Self::Financial => "3",
            Self::Sensitive => "4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EaseOfIdentification {
    Negligible,
    Limited,
    Significant,
    Maximum,
}

impl ScoredOption for EaseOfIdentification {
    const ALL: &'static [Self] = &[
        Self::Negligible,
        Self::Limited,
        Self::Significant,
        Self::Maximum,
    ];

    fn score(self) -> f64 {
        match self {
            Self::Negligible => 0.25,
            Self::Limited => 0.5,
            Self::Significant => 0.75,
            Self::Maximum => 1.0,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Negligible => "0.25",
            Self::Limited => "0.5",
            Self::Significant => "0.75",
            Self::Maximum => "1",
        }
    }
}

/// Shared scale of the confidentiality, integrity and availability criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossLevel {
    None,
    Partial,
    Full,
}

impl ScoredOption for LossLevel {
    const ALL: &'static [Self] = &[Self::None, Self::Partial, Self::Full];

    fn score(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Partial => 0.25,
            Self::Full => 0.5,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Partial => "0.25",
            Self::Full => "0.5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaliciousIntent {
    No,
    Yes,
}

impl ScoredOption for MaliciousIntent {
    const ALL: &'static [Self] = &[Self::No, Self::Yes];

    fn score(self) -> f64 {
        match self {
            Self::No => 0.0,
            Self::Yes => 0.5,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::No => "0",
            Self::Yes => "0.5",
        }
    }
}

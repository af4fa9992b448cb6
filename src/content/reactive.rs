use super::{ContentTable, CriterionContent, OptionContent};

// The radio group shows the description itself as the option label.
const fn opt(value: &'static str, description: &'static str) -> OptionContent {
    OptionContent {
        value,
        label: description,
        description,
    }
}

const DPC_INFO: &str = "DPC Explanation:\n\n\
• 1 – Simple data: basic personal info with minimal risk.\n\
• 2 – Behavioral data: user preferences or habits that may profile an individual.\n\
• 3 – Financial data: detailed financial information with high risk.\n\
• 4 – Sensitive data: data that can cause significant harm if disclosed.";

pub static TABLE: ContentTable = ContentTable {
    unset_label: "",
    criteria: [
        CriterionContent {
            summary: "DPC represents the type of data involved in the breach.",
            select_prompt: None,
            comment_prompt: Some("Why do you assign this DPC score?"),
            options: &[
                opt("1", "1 – Simple data, e.g., basic info like name and contact details."),
                opt("2", "2 – Behavioral data, e.g., preferences, habits, or traffic data."),
                opt("3", "3 – Financial data, e.g., bank statements, transaction details."),
                opt("4", "4 – Sensitive data, e.g., health or political affiliation."),
            ],
            examples: Some(DPC_INFO),
        },
        CriterionContent {
            summary: "EI measures how easily an individual can be identified from the breached data.",
            select_prompt: None,
            comment_prompt: Some("Why do you assign this EI score?"),
            options: &[
                opt("0.25", "0.25 – Very difficult to identify the individual."),
                opt("0.5", "0.5 – Identification is possible but requires effort."),
                opt("0.75", "0.75 – Several clues make identification easier."),
                opt("1", "1 – Individual can be directly identified."),
            ],
            examples: None,
        },
        CriterionContent {
            summary: "This evaluates the extent of data disclosure.",
            select_prompt: None,
            comment_prompt: Some("Why do you assign this Confidentiality score?"),
            options: &[
                opt("0", "0 – No breach in confidentiality."),
                opt("0.25", "0.25 – Data shared with a few known recipients."),
                opt("0.5", "0.5 – Data shared with several recipients."),
            ],
            examples: None,
        },
        CriterionContent {
            summary: "This measures if and how the data has been altered.",
            select_prompt: None,
            comment_prompt: Some("Why do you assign this Integrity score?"),
            options: &[
                opt("0", "0 – Data remains unaltered."),
                opt("0.25", "0.25 – Minor alterations with easy recovery."),
                opt("0.5", "0.5 – Data altered irrecoverably."),
            ],
            examples: None,
        },
        CriterionContent {
            summary: "This examines whether data can be accessed when needed.",
            select_prompt: None,
            comment_prompt: Some("Why do you assign this Availability score?"),
            options: &[
                opt("0", "0 – Data recoverable; backups or alternative sources exist."),
                opt("0.25", "0.25 – Low availability; temporary unavailability."),
                opt("0.5", "0.5 – High unavailability; data completely lost."),
            ],
            examples: None,
        },
        CriterionContent {
            summary: "This evaluates whether the breach was accidental or intentional.",
            select_prompt: None,
            comment_prompt: Some("Why do you assign this Malicious Intent score?"),
            options: &[
                opt("0", "0 – No; breach appears accidental."),
                opt("0.5", "0.5 – Yes; evidence of deliberate action."),
            ],
            examples: None,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::criteria::Criterion;

    #[test]
    fn descriptions_match_radio_form_copy() {
        let expected = [
            (Criterion::Dpc, "1", "1 – Simple data, e.g., basic info like name and contact details."),
            (Criterion::Dpc, "2", "2 – Behavioral data, e.g., preferences, habits, or traffic data."),
            (Criterion::Dpc, "3", "3 – Financial data, e.g., bank statements, transaction details."),
            (Criterion::Dpc, "4", "4 – Sensitive data, e.g., health or political affiliation."),
            (Criterion::Ei, "0.25", "0.25 – Very difficult to identify the individual."),
            (Criterion::Ei, "0.5", "0.5 – Identification is possible but requires effort."),
            (Criterion::Ei, "0.75", "0.75 – Several clues make identification easier."),
            (Criterion::Ei, "1", "1 – Individual can be directly identified."),
            (Criterion::Confidentiality, "0", "0 – No breach in confidentiality."),
            (Criterion::Confidentiality, "0.25", "0.25 – Data shared with a few known recipients."),
            (Criterion::Confidentiality, "0.5", "0.5 – Data shared with several recipients."),
            (Criterion::Integrity, "0", "0 – Data remains unaltered."),
            (Criterion::Integrity, "0.25", "0.25 – Minor alterations with easy recovery."),
            (Criterion::Integrity, "0.5", "0.5 – Data altered irrecoverably."),
            (Criterion::Availability, "0", "0 – Data recoverable; backups or alternative sources exist."),
            (Criterion::Availability, "0.25", "0.25 – Low availability; temporary unavailability."),
            (Criterion::Availability, "0.5", "0.5 – High unavailability; data completely lost."),
            (Criterion::Malicious, "0", "0 – No; breach appears accidental."),
            (Criterion::Malicious, "0.5", "0.5 – Yes; evidence of deliberate action."),
        ];
        let listed: usize = Criterion::ALL.iter().map(|c| c.options().len()).sum();
        assert_eq!(expected.len(), listed);
        for (criterion, value, description) in expected {
            assert_eq!(TABLE.description(criterion, value), Some(description), "{criterion} {value}");
            assert_eq!(TABLE.label(criterion, value), Some(description), "{criterion} {value}");
        }
    }

    #[test]
    fn dpc_explanation_lists_four_classes() {
        let info = TABLE.examples(Criterion::Dpc).expect("dpc explanation");
        assert!(info.starts_with("DPC Explanation:\n\n"));
        assert_eq!(info.lines().filter(|line| line.starts_with("• ")).count(), 4);
    }
}

use super::{ContentTable, CriterionContent, OptionContent};

const fn opt(value: &'static str, label: &'static str, description: &'static str) -> OptionContent {
    OptionContent {
        value,
        label,
        description,
    }
}

const DPC_EXAMPLES: &str = "Data Processing Context (DPC) Examples:\n\n\
Simple:\n • Customer list of a supermarket (Score: 1)\n • Customer list of a luxury car dealership (Score: 2)\n • List from an electronic pharmacy (Score: 3)\n • List of undercover agents (Score: 4)\n\n\
Behavioral:\n • Helpdesk call history (Score: 1)\n • Call history for one week (Score: 2)\n • Call history for one year (Score: 3)\n • Call history from a support center (Score: 4)";

const EI_EXAMPLES: &str = "Ease of Identification (EI) Examples:\n\n\
Negligible: Common name in a large country (Score: 0.25)\n\
Limited: Full name in a small town (Score: 0.5)\n\
Significant: Full name with additional details (Score: 0.75)\n\
Maximum: Full name with date of birth or email (Score: 1)";

const CONFIDENTIALITY_EXAMPLES: &str = "Loss of Confidentiality Examples:\n\n\
None: No data exposure (Score: 0)\n\
Known Recipients: E.g., an email sent to a few contacts (Score: 0.25)\n\
Unknown Recipients: E.g., data published on a public forum (Score: 0.5)";

const INTEGRITY_EXAMPLES: &str = "Loss of Integrity Examples:\n\n\
No loss: Data remains unchanged (Score: 0)\n\
Altered but recoverable: Record modified but backup exists (Score: 0.25)\n\
Altered irrecoverably: Record modified with no recovery (Score: 0.5)";

const AVAILABILITY_EXAMPLES: &str = "Loss of Availability Examples:\n\n\
Data recoverable: Backup available (Score: 0)\n\
Temporary unavailability: Data inaccessible for a short time (Score: 0.25)\n\
Full unavailability: Data completely lost (Score: 0.5)";

const MALICIOUS_EXAMPLES: &str = "Malicious Intent Examples:\n\n\
No: Accidental breach (Score: 0)\n\
Yes: Deliberate data leak (Score: 0.5)";

pub static TABLE: ContentTable = ContentTable {
    unset_label: "-- Select --",
    criteria: [
        CriterionContent {
            summary: "DPC represents the type of data involved in the breach.",
            select_prompt: Some("Select the data category:"),
            comment_prompt: None,
            options: &[
                opt("1", "Simple (1)", "Simple: Basic personal info such as name and contact details."),
                opt("2", "Behavioral (2)", "Behavioral: Data regarding habits, preferences, or traffic data."),
                opt("3", "Financial (3)", "Financial: Data related to monetary transactions and bank details."),
                opt("4", "Sensitive (4)", "Sensitive: Highly sensitive information (health, politics, etc.)."),
            ],
            examples: Some(DPC_EXAMPLES),
        },
        CriterionContent {
            summary: "EI measures how easily an individual can be identified from the breached data.",
            select_prompt: Some("Select the level of ease of identification:"),
            comment_prompt: None,
            options: &[
                opt("0.25", "Negligible (0.25)", "Negligible: It is very difficult to uniquely identify the individual."),
                opt("0.5", "Limited (0.5)", "Limited: Some clues exist, but identification requires effort."),
                opt("0.75", "Significant (0.75)", "Significant: Several identifiers make it easier to pinpoint the individual."),
                opt("1", "Maximum (1)", "Maximum: The individual can be directly identified from the data."),
            ],
            examples: Some(EI_EXAMPLES),
        },
        CriterionContent {
            summary: "This evaluates the extent of data disclosure.",
            select_prompt: Some("Select Loss of Confidentiality:"),
            comment_prompt: None,
            options: &[
                opt("0", "None (0)", "None: No breach in confidentiality."),
                opt("0.25", "Known Recipients (0.25)", "Known Recipients: Data sent to a few known contacts."),
                opt("0.5", "Unknown Recipients (0.5)", "Unknown Recipients: Data sent to many or unknown recipients."),
            ],
            examples: Some(CONFIDENTIALITY_EXAMPLES),
        },
        CriterionContent {
            summary: "This measures if and how the data has been altered.",
            select_prompt: Some("Select Loss of Integrity:"),
            comment_prompt: None,
            options: &[
                opt("0", "No loss (0)", "No loss: Data remains unaltered."),
                opt("0.25", "Altered but recoverable (0.25)", "Altered but recoverable: Data was changed but can be restored."),
                opt("0.5", "Altered irrecoverably (0.5)", "Altered irrecoverably: Data was changed and cannot be recovered."),
            ],
            examples: Some(INTEGRITY_EXAMPLES),
        },
        CriterionContent {
            summary: "This examines whether data can be accessed when needed.",
            select_prompt: Some("Select Loss of Availability:"),
            comment_prompt: None,
            options: &[
                opt("0", "Data recoverable (0)", "Data recoverable: Backups or alternative sources exist."),
                opt("0.25", "Temporary unavailability (0.25)", "Temporary unavailability: Data is inaccessible for a short period."),
                opt("0.5", "Full unavailability (0.5)", "Full unavailability: Data cannot be recovered at all."),
            ],
            examples: Some(AVAILABILITY_EXAMPLES),
        },
        CriterionContent {
            summary: "This evaluates whether the breach was accidental or intentional.",
            select_prompt: Some("Select Malicious Intent:"),
            comment_prompt: None,
            options: &[
                opt("0", "No (0)", "No: The breach appears accidental."),
                opt("0.5", "Yes (0.5)", "Yes: The breach was intentional or malicious."),
            ],
            examples: Some(MALICIOUS_EXAMPLES),
        },
    ],
};

use crate::calculator::Calculator;
use crate::content::{ENISA_REPORT_URL, TITLE};
use crate::types::criteria::Criterion;

pub fn to_markdown(calculator: &Calculator) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {TITLE}\n\n"));
    output.push_str(&format!("Variant: {}\n\n", calculator.variant()));

    output.push_str("## Selections\n\n");
    let content = calculator.content();
    for criterion in Criterion::ALL {
        let selected = calculator.assessment().selected(criterion);
        let label = selected
            .and_then(|value| content.label(criterion, value))
            .unwrap_or(content.unset_label);
        output.push_str(&format!("- {}: {}\n", criterion.title(), label));
    }
    output.push('\n');

    output.push_str("## Risk Summary\n\n");
    let Some(result) = calculator.result() else {
        output.push_str("- not computed\n\n");
        output.push_str(&format!("Methodology: [ENISA]({ENISA_REPORT_URL})\n"));
        return output;
    };

    output.push_str(&format!("{}\n\n", result.formula()));

    let with_comments = result.breakdown.iter().any(|row| row.comment.is_some());
    if with_comments {
        output.push_str("| Criterion | Selected Option | Score | Description | Comment |\n");
        output.push_str("|---|---|---|---|---|\n");
    } else {
        output.push_str("| Criterion | Selected Option | Score | Description |\n");
        output.push_str("|---|---|---|---|\n");
    }
    for row in &result.breakdown {
        output.push_str(&format!(
            "| {} | {} | {} | {} |",
            row.title, row.option, row.option, row.description
        ));
        if let Some(comment) = &row.comment {
            output.push_str(&format!(" {} |", escape_cell(comment)));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "\n### Final Severity Score: {} - <span style=\"color: {}\">{}</span>\n\n",
        result.severity_display(),
        result.risk_level.color(),
        result.risk_level
    ));
    output.push_str(&format!("Methodology: [ENISA]({ENISA_REPORT_URL})\n"));
    output
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace(|c: char| c == '\r' || c == '\n', " ")
}

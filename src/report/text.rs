use crate::calculator::Calculator;
use crate::content::TITLE;
use crate::types::report::SeverityResult;
use crate::types::variant::RiskLevel;
use colored::Colorize;

pub fn to_text(calculator: &Calculator) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} ({})\n\n", TITLE.bold(), calculator.variant()));

    match calculator.result() {
        Some(result) => push_summary(&mut output, result),
        None => output.push_str("No result yet: select the inputs and run compute.\n"),
    }
    output
}

/// Risk summary block, also used by the interactive session after each change.
pub fn summary(result: &SeverityResult) -> String {
    let mut output = String::new();
    push_summary(&mut output, result);
    output
}

fn push_summary(output: &mut String, result: &SeverityResult) {
    output.push_str(&format!("{}\n", "Risk Summary".bold()));
    output.push_str(&format!("{}\n\n", result.formula()));

    let with_comments = result.breakdown.iter().any(|row| row.comment.is_some());
    let title_width = result
        .breakdown
        .iter()
        .map(|row| row.title.len())
        .max()
        .unwrap_or(0)
        .max("Criterion".len());

    let mut header = format!(
        "{:<title_width$}  {:<15}  {:<5}  Description",
        "Criterion", "Selected Option", "Score"
    );
    if with_comments {
        header.push_str("  | Comment");
    }
    output.push_str(&format!("{}\n", header.bold()));

    for row in &result.breakdown {
        let mut line = format!(
            "{:<title_width$}  {:<15}  {:<5}  {}",
            row.title, row.option, row.option, row.description
        );
        if let Some(comment) = row.comment.as_deref().filter(|comment| !comment.is_empty()) {
            line.push_str(&format!("  | {}", comment.replace('\n', " ")));
        }
        output.push_str(&line);
        output.push('\n');
    }

    output.push_str(&format!(
        "\nFinal Severity Score: {} - {}\n",
        result.severity_display(),
        colored_level(result.risk_level)
    ));
}

fn colored_level(level: RiskLevel) -> String {
    let (r, g, b) = level.rgb();
    level.label().truecolor(r, g, b).bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::criteria::Criterion;
    use crate::types::variant::Variant;

    #[test]
    fn text_report_without_result_says_so() {
        colored::control::set_override(false);
        let rendered = to_text(&Calculator::new(Variant::Explicit));
        assert!(rendered.contains("Data Breach Severity Calculator (explicit)"));
        assert!(rendered.contains("No result yet"));
    }

    #[test]
    fn text_report_contains_formula_rows_and_verdict() {
        colored::control::set_override(false);
        let mut calculator = Calculator::new(Variant::Explicit);
        calculator.set(Criterion::Ei, "0.25").expect("valid ei");
        calculator.compute().expect("compute");

        let rendered = to_text(&calculator);
        assert!(rendered.contains("Formula: SE = (DPC: 1) x (EI: 0.25) + (CB: 0.00)"));
        assert!(rendered.contains("Loss of Availability"));
        assert!(rendered.contains("Negligible: It is very difficult"));
        assert!(rendered.contains("Final Severity Score: 0.25 - Low"));
        assert!(!rendered.contains("Comment"));
    }

    #[test]
    fn text_report_shows_comments_for_reactive_variant() {
        colored::control::set_override(false);
        let mut calculator = Calculator::new(Variant::Reactive);
        calculator
            .set_comment(Criterion::Dpc, "customer list only")
            .expect("comments enabled");
        let rendered = to_text(&calculator);
        assert!(rendered.contains("| Comment"));
        assert!(rendered.contains("| customer list only"));
    }
}

use crate::calculator::Calculator;
use crate::content::{ATTRIBUTION, ENISA_REPORT_URL, INTRO, TITLE};
use crate::types::criteria::Criterion;
use crate::types::variant::Variant;

/// Renders the whole form: sections with their controls, Know More panels,
/// and the risk summary once a result exists.
pub fn to_html(calculator: &Calculator) -> String {
    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str(&format!("<title>{TITLE}</title>\n</head>\n<body>\n"));
    output.push_str(&format!(
        "<div class=\"container\">\n<header><h1>{TITLE}</h1></header>\n<main>\n"
    ));
    output.push_str(&format!("<p>{}</p>\n", escape(INTRO)));
    output.push_str(&format!(
        "<p>{} <a href=\"{ENISA_REPORT_URL}\" target=\"_blank\" rel=\"noopener noreferrer\">ENISA report</a></p>\n",
        escape(ATTRIBUTION)
    ));

    output.push_str("<form>\n");
    for criterion in Criterion::ALL {
        push_section(&mut output, calculator, criterion);
    }
    if calculator.variant() == Variant::Explicit {
        output.push_str("<button type=\"submit\">Calculate Severity</button>\n");
    }
    output.push_str("</form>\n");

    push_results(&mut output, calculator);
    output.push_str("</main>\n</div>\n</body>\n</html>\n");
    output
}

fn push_section(output: &mut String, calculator: &Calculator, criterion: Criterion) {
    let content = calculator.content().criterion(criterion);
    let key = criterion.key();
    let selected = calculator.assessment().selected(criterion);

    output.push_str(&format!(
        "<div class=\"section\" id=\"{key}\">\n<h2>{}</h2>\n<p>{}</p>\n",
        escape(criterion.title()),
        escape(content.summary)
    ));

    if let Some(prompt) = content.comment_prompt {
        output.push_str(&format!(
            "<label class=\"question\" for=\"{key}-comment\">{}</label>\n<textarea id=\"{key}-comment\" name=\"{key}-comment\" placeholder=\"Type your explanation here...\">{}</textarea>\n",
            escape(prompt),
            escape(calculator.assessment().comment(criterion))
        ));
    }

    if let Some(examples) = content.examples {
        let open = if calculator.is_examples_open(criterion) {
            " open"
        } else {
            ""
        };
        output.push_str(&format!(
            "<details class=\"know-more\"{open}><summary>Know More</summary><div class=\"examples-box\"><pre>{}</pre></div></details>\n",
            escape(examples)
        ));
    }

    match content.select_prompt {
        Some(prompt) => {
            output.push_str(&format!(
                "<label for=\"{key}\">{}</label>\n<select id=\"{key}\" name=\"{key}\">\n",
                escape(prompt)
            ));
            if selected.is_none() {
                output.push_str(&format!(
                    "<option value=\"\" selected>{}</option>\n",
                    escape(calculator.content().unset_label)
                ));
            }
            for option in content.options {
                let mark = if selected == Some(option.value) {
                    " selected"
                } else {
                    ""
                };
                output.push_str(&format!(
                    "<option value=\"{}\"{mark}>{}</option>\n",
                    option.value,
                    escape(option.label)
                ));
            }
            output.push_str("</select>\n");
            output.push_str(&format!(
                "<p class=\"description\">{}</p>\n",
                escape(calculator.selected_description(criterion))
            ));
        }
        None => {
            output.push_str("<div class=\"radio-group\">\n");
            for option in content.options {
                let mark = if selected == Some(option.value) {
                    " checked"
                } else {
                    ""
                };
                output.push_str(&format!(
                    "<label><input type=\"radio\" name=\"{key}\" value=\"{}\"{mark}>{}</label>\n",
                    option.value,
                    escape(option.label)
                ));
            }
            output.push_str("</div>\n");
        }
    }
    output.push_str("</div>\n");
}

fn push_results(output: &mut String, calculator: &Calculator) {
    let Some(result) = calculator.result() else {
        return;
    };
    let with_comments = result.breakdown.iter().any(|row| row.comment.is_some());

    output.push_str("<div class=\"risk-summary\">\n<h2>Risk Summary</h2>\n");
    output.push_str(&format!("<p class=\"formula\">{}</p>\n", result.formula()));
    output.push_str("<table>\n<thead><tr><th>Criterion</th><th>Selected Option</th><th>Score</th><th>Description</th>");
    if with_comments {
        output.push_str("<th>Comment</th>");
    }
    output.push_str("</tr></thead>\n<tbody>\n");
    for row in &result.breakdown {
        output.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            escape(row.title),
            row.option,
            row.option,
            escape(row.description)
        ));
        if let Some(comment) = &row.comment {
            output.push_str(&format!("<td>{}</td>", escape(comment)));
        }
        output.push_str("</tr>\n");
    }
    output.push_str("</tbody>\n</table>\n");
    output.push_str(&format!(
        "<h3>Final Severity Score: {} - <span style=\"color: {}\">{}</span></h3>\n</div>\n",
        result.severity_display(),
        result.risk_level.color(),
        result.risk_level
    ));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

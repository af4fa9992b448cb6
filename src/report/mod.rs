pub mod html;
pub mod json;
pub mod md;
pub mod text;

use crate::calculator::Calculator;
use crate::error::{Result, SeverityError};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = SeverityError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "md" => Ok(Self::Md),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            other => Err(SeverityError::ConfigParse(format!(
                "unsupported output format: {other}"
            ))),
        }
    }
}

pub fn render(calculator: &Calculator, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::to_text(calculator)),
        OutputFormat::Md => Ok(md::to_markdown(calculator)),
        OutputFormat::Json => json::to_json(calculator).map_err(SeverityError::Json),
        OutputFormat::Html => Ok(html::to_html(calculator)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::OUTPUT_FORMATS;

    #[test]
    fn every_configurable_format_parses() {
        for name in OUTPUT_FORMATS {
            assert!(name.parse::<OutputFormat>().is_ok(), "{name}");
        }
        assert!("sarif".parse::<OutputFormat>().is_err());
    }
}

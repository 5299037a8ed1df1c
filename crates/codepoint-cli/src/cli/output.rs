use serde::Serialize;

use super::args::{Encoding, OutputFormat};

/// Result of one boundary operation, rendered as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Scalar {
        codepoint: String,
        scalar: char,
    },
    Text {
        encoding: Encoding,
        text: String,
        units: usize,
    },
    Length {
        encoding: Encoding,
        scalars: usize,
        units: usize,
    },
}

impl Outcome {
    pub fn scalar(c: char) -> Self {
        Self::Scalar {
            codepoint: format!("U+{:04X}", u32::from(c)),
            scalar: c,
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(match self {
                Self::Scalar { codepoint, scalar } => format!("{codepoint} {scalar}"),
                Self::Text { text, .. } => text.clone(),
                Self::Length { scalars, units, .. } => format!("scalars={scalars} units={units}"),
            }),
        }
    }
}

pub mod error;
pub mod render;
pub mod segment;
pub mod value;

pub use error::{RecaseError, Result};
pub use segment::segment;
pub use value::{camel_case_value, convert_value, dot_case_value, kebab_case_value};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Kebab,
    Camel,
    Dot,
    Snake,
    Pascal,
}

impl CaseStyle {
    pub fn all() -> &'static [CaseStyle] {
        &[
            CaseStyle::Kebab,
            CaseStyle::Camel,
            CaseStyle::Dot,
            CaseStyle::Snake,
            CaseStyle::Pascal,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Camel => "camel",
            CaseStyle::Dot => "dot",
            CaseStyle::Snake => "snake",
            CaseStyle::Pascal => "pascal",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = RecaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "kebab" => Ok(CaseStyle::Kebab),
            "camel" => Ok(CaseStyle::Camel),
            "dot" => Ok(CaseStyle::Dot),
            "snake" => Ok(CaseStyle::Snake),
            "pascal" => Ok(CaseStyle::Pascal),
            other => Err(RecaseError::UnknownStyle(other.to_string())),
        }
    }
}

/// Segment free-form text and render it under the given style.
pub fn convert(input: &str, style: CaseStyle) -> String {
    style.render(&segment::segment(input))
}

/// Convert free-form text to kebab-case.
pub fn to_kebab_case(input: &str) -> String {
    convert(input, CaseStyle::Kebab)
}

/// Convert free-form text to camelCase.
pub fn to_camel_case(input: &str) -> String {
    convert(input, CaseStyle::Camel)
}

/// Convert free-form text to dot.case.
pub fn to_dot_case(input: &str) -> String {
    convert(input, CaseStyle::Dot)
}

/// Convert free-form text to snake_case.
pub fn to_snake_case(input: &str) -> String {
    convert(input, CaseStyle::Snake)
}

/// Convert free-form text to PascalCase.
pub fn to_pascal_case(input: &str) -> String {
    convert(input, CaseStyle::Pascal)
}

//! Loosely typed cell values. Strict typing is deferred to presentation.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Largest magnitude at which a whole `f64` is still printed as an integer.
const MAX_EXACT_INTEGER: f64 = 1e15;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// True for numbers and for text that reads as a number.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(text) => text.trim().parse::<f64>().is_ok(),
            _ => false,
        }
    }

    /// Display text; empty cells render as an empty string, never a null marker.
    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(value) => format_number(*value),
            Self::Bool(true) => "True".to_string(),
            Self::Bool(false) => "False".to_string(),
        }
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(data: &calamine::Data) -> Self {
        match data {
            calamine::Data::Empty => Self::Empty,
            calamine::Data::String(s) => Self::Text(s.clone()),
            calamine::Data::Float(f) => Self::Number(*f),
            calamine::Data::Int(i) => Self::Number(*i as f64),
            calamine::Data::Bool(b) => Self::Bool(*b),
            calamine::Data::DateTime(dt) => match dt.as_datetime() {
                Some(value) if dt.is_datetime() => Self::Text(format_timestamp(value)),
                _ => Self::Number(dt.as_f64()),
            },
            calamine::Data::DateTimeIso(s) | calamine::Data::DurationIso(s) => {
                Self::Text(s.clone())
            }
            calamine::Data::Error(err) => Self::Text(err.to_string()),
        }
    }
}

pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn format_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

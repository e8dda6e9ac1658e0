use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Display time given to a freshly added iteration.
pub const DEFAULT_DURATION_MS: u64 = 2000;
/// Shortest display time an iteration may have.
pub const MIN_DURATION_MS: u64 = 500;

/// Values of one iteration, keyed by placeholder id.
pub type IterationValues = BTreeMap<String, PlaceholderValue>;

/// One complete set of placeholder values plus how long it stays on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataIteration {
    pub id: String,
    #[serde(default)]
    pub values: IterationValues,
    /// Display time in milliseconds. Never below [`MIN_DURATION_MS`] when
    /// produced by the data manager.
    pub duration: u64,
}

/// A value shown in a placeholder. Imported documents may carry numbers,
/// the editor itself always writes text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceholderValue {
    Text(String),
    Number(f64),
}

impl PlaceholderValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, PlaceholderValue::Text(text) if text.is_empty())
    }
}

impl Default for PlaceholderValue {
    fn default() -> Self {
        PlaceholderValue::Text(String::new())
    }
}

impl From<String> for PlaceholderValue {
    fn from(value: String) -> Self {
        PlaceholderValue::Text(value)
    }
}

impl From<&str> for PlaceholderValue {
    fn from(value: &str) -> Self {
        PlaceholderValue::Text(value.to_string())
    }
}

impl fmt::Display for PlaceholderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderValue::Text(text) => f.write_str(text),
            PlaceholderValue::Number(number) => write!(f, "{}", number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_and_number_values() {
        let iteration: DataIteration = serde_json::from_str(
            r#"{"id":"i1","values":{"a":"Shoes","b":19.5,"c":3},"duration":1500}"#,
        )
        .unwrap();
        assert_eq!(iteration.values["a"], PlaceholderValue::from("Shoes"));
        assert_eq!(iteration.values["b"].to_string(), "19.5");
        assert_eq!(iteration.values["c"].to_string(), "3");
        assert_eq!(iteration.duration, 1500);
    }

    #[test]
    fn missing_values_default_to_empty_map() {
        let iteration: DataIteration =
            serde_json::from_str(r#"{"id":"i1","duration":2000}"#).unwrap();
        assert!(iteration.values.is_empty());
    }
}

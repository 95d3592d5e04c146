//! Wire DTOs for the remote analysis API.
//!
//! DESIGN
//! ======
//! Response fields are lenient: the analysis service may omit or null any
//! of them, and rendering still needs a value to write. Missing strings
//! become empty, a missing or null score becomes `0`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// JSON body for the text submission path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextRequest {
    pub text: String,
}

/// Successful analysis response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Risk score in the range 0..=100.
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: f64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub explanation: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub emotion: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub logic: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub pattern: String,
    /// Ordered list of short reasons backing the score.
    #[serde(default)]
    pub reasons: Option<Vec<String>>,
    #[serde(default)]
    pub mood: Option<Mood>,
    /// Confidence label (e.g. `"High"`), shown verbatim.
    #[serde(default)]
    pub confidence: Option<String>,
}

/// Mood badge descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub emoji: String,
    pub label: String,
    /// Style modifier appended to `mood-badge`.
    #[serde(rename = "class")]
    pub class_name: String,
}

/// Error body returned with a non-success status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Reasons to list in the reasons panel, if any were returned.
    pub fn listed_reasons(&self) -> Option<&[String]> {
        self.reasons.as_deref().filter(|reasons| !reasons.is_empty())
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|score| score.is_finite()).unwrap_or(0.0))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

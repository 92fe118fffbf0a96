use serde::{Deserialize, Serialize};

/// A timed span of transcript text, as exchanged with the generation
/// pipeline. Immutable once produced; timing is a property of the source
/// media, not of the language.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscribedSentence {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl TranscribedSentence {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

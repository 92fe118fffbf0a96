use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::TranscribedSentence;

/// One transcribed sentence as sent by the enrichment platform. The wire
/// format is snake_case. Auxiliary ASR fields (`id`, `is_transient`,
/// probabilities) are carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_transient: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_speech_prob: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_caption_prob: Option<f64>,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Sentence {
    pub fn to_domain(&self) -> TranscribedSentence {
        TranscribedSentence::new(self.text.clone(), self.start, self.end)
    }
}

/// Full transcript of one piece of source media. `text` is the denormalized
/// space-joined concatenation of the sentence texts, in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Transcript {
    pub original_file_name: String,
    #[validate(length(min = 1, message = "language must not be empty"))]
    pub language: String,
    pub text: String,
    #[validate(length(min = 1, message = "transcript must contain at least one sentence"))]
    pub sentences: Vec<Sentence>,
}

impl Transcript {
    /// Space-joins sentence texts in order, restoring the denormalized
    /// full-text invariant.
    pub fn joined_text(sentences: &[Sentence]) -> String {
        sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Request body of `POST /generate-quizzes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct TranscriptWrapper {
    pub enrichment_version_id: String,
    #[validate(nested)]
    pub transcript: Transcript,
    pub media_types: Vec<String>,
    pub disciplines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, start: f64, end: f64) -> Sentence {
        Sentence {
            id: None,
            is_transient: None,
            no_speech_prob: None,
            no_caption_prob: None,
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn sentence_wire_format_is_snake_case() {
        let json = serde_json::to_value(sentence("hello", 0.0, 1.5)).unwrap();
        assert_eq!(json["text"], "hello");
        assert_eq!(json["start"], 0.0);
        assert!(json.get("no_speech_prob").is_none());
    }

    #[test]
    fn joined_text_concatenates_in_order() {
        let sentences = vec![
            sentence("first part", 0.0, 1.0),
            sentence("second part", 1.0, 2.0),
        ];
        assert_eq!(Transcript::joined_text(&sentences), "first part second part");
    }

    #[test]
    fn transcript_validation_rejects_empty_sentences() {
        let transcript = Transcript {
            original_file_name: "lecture.mp4".to_string(),
            language: "fr".to_string(),
            text: String::new(),
            sentences: vec![],
        };
        assert!(transcript.validate().is_err());
    }

    #[test]
    fn wrapper_validation_rejects_empty_language() {
        let wrapper = TranscriptWrapper {
            enrichment_version_id: "ev-1".to_string(),
            transcript: Transcript {
                original_file_name: "lecture.mp4".to_string(),
                language: String::new(),
                text: "hello".to_string(),
                sentences: vec![sentence("hello", 0.0, 1.0)],
            },
            media_types: vec![],
            disciplines: vec![],
        };
        assert!(wrapper.validate().is_err());
    }
}

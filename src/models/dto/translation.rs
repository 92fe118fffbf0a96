use serde::{Deserialize, Serialize};

use super::quiz::{EnrichmentVersionMetadata, MultipleChoiceQuestion};
use super::transcript::Transcript;

/// Request body of `POST /translate-enrichment`: a full enrichment bundle in
/// the source language plus the language pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationInputWrapper {
    #[serde(alias = "enrichment_version_metadata")]
    pub enrichment_version_metadata: EnrichmentVersionMetadata,
    #[serde(alias = "multiple_choice_questions")]
    pub multiple_choice_questions: Vec<MultipleChoiceQuestion>,
    pub transcript: Transcript,
    #[serde(alias = "from_language")]
    pub from_language: String,
    #[serde(alias = "to_language")]
    pub to_language: String,
}

/// Response envelope of `POST /translate-enrichment`: the same structural
/// skeleton as the input with translated text fields and `status` set on
/// success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutputWrapper {
    #[serde(alias = "enrichment_version_metadata")]
    pub enrichment_version_metadata: EnrichmentVersionMetadata,
    #[serde(alias = "multiple_choice_questions")]
    pub multiple_choice_questions: Vec<MultipleChoiceQuestion>,
    pub transcript: Transcript,
    #[serde(default, alias = "task_id", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, alias = "failure_cause", skip_serializing_if = "Option::is_none")]
    pub failure_cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_wrapper_accepts_snake_case_language_pair() {
        let json = r#"{
            "enrichment_version_metadata": {"title": "T", "description": "D"},
            "multiple_choice_questions": [],
            "transcript": {
                "original_file_name": "lecture.mp4",
                "language": "en",
                "text": "hello world",
                "sentences": [
                    {"start": 0.0, "end": 1.0, "text": "hello world"}
                ]
            },
            "from_language": "en",
            "to_language": "fr"
        }"#;

        let wrapper: TranslationInputWrapper = serde_json::from_str(json).unwrap();
        assert_eq!(wrapper.from_language, "en");
        assert_eq!(wrapper.to_language, "fr");
        assert_eq!(wrapper.transcript.sentences.len(), 1);
    }
}

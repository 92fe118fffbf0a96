#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::{
        AnswerPointer, Choice, EnrichmentVersionMetadata, MultipleChoiceQuestion, QuizzesWrapper,
        Sentence, Transcript, TranscriptWrapper, TranslationInputWrapper,
    };

    pub fn sentence(text: &str, start: f64, end: f64) -> Sentence {
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

    /// Two-sentence transcript whose full text honors the space-join
    /// invariant.
    pub fn transcript(language: &str) -> Transcript {
        let sentences = vec![
            sentence("The capital of France is Paris.", 0.0, 4.5),
            sentence("It lies on the Seine.", 4.5, 8.0),
        ];
        Transcript {
            original_file_name: "lecture.mp4".to_string(),
            language: language.to_string(),
            text: Transcript::joined_text(&sentences),
            sentences,
        }
    }

    pub fn transcript_wrapper(language: &str) -> TranscriptWrapper {
        TranscriptWrapper {
            enrichment_version_id: "ev-42".to_string(),
            transcript: transcript(language),
            media_types: vec!["video".to_string()],
            disciplines: vec!["geography".to_string()],
        }
    }

    pub fn question() -> MultipleChoiceQuestion {
        MultipleChoiceQuestion {
            id: Some("q-1".to_string()),
            question: "What is the capital of France?".to_string(),
            explanation: "Paris is the capital of France.".to_string(),
            choices: vec![
                Choice {
                    id: Some("c-1".to_string()),
                    option_text: "Paris".to_string(),
                    correct_answer: true,
                },
                Choice {
                    id: Some("c-2".to_string()),
                    option_text: "Lyon".to_string(),
                    correct_answer: false,
                },
                Choice {
                    id: Some("c-3".to_string()),
                    option_text: "Marseille".to_string(),
                    correct_answer: false,
                },
                Choice {
                    id: Some("c-4".to_string()),
                    option_text: "Lille".to_string(),
                    correct_answer: false,
                },
            ],
            answer_pointer: Some(AnswerPointer {
                start_answer_pointer: Some("00:00:01".to_string()),
                stop_answer_pointer: Some("00:00:05".to_string()),
            }),
        }
    }

    pub fn metadata() -> EnrichmentVersionMetadata {
        EnrichmentVersionMetadata {
            title: "Geography".to_string(),
            description: "A short lecture about France.".to_string(),
            topics: Some(vec!["France".to_string(), "capitals".to_string()]),
            discipline: None,
            media_type: None,
        }
    }

    pub fn quizzes_wrapper() -> QuizzesWrapper {
        QuizzesWrapper {
            enrichment_version_metadata: metadata(),
            multiple_choice_questions: vec![question()],
            task_id: None,
            failure_cause: None,
            status: None,
        }
    }

    pub fn translation_input(from_language: &str, to_language: &str) -> TranslationInputWrapper {
        TranslationInputWrapper {
            enrichment_version_metadata: metadata(),
            multiple_choice_questions: vec![question()],
            transcript: transcript(from_language),
            from_language: from_language.to_string(),
            to_language: to_language.to_string(),
        }
    }
}
